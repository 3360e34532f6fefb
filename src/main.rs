// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Lyrebird.
//!
//! A terminal music player that shows time-synchronised lyrics.
//!
//! This application coordinates a TUI frontend built with `ratatui`, an audio
//! player worker driving `mpv`, and a background task worker that reads lyric
//! files, scans the music directory and keeps the playback session in a small
//! database.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state and renders the UI.
//! * **Background Workers** load lyrics, persist the session and drive audio
//!   playback, reporting back with events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.
//!
//! Running `lyrebird scan` rebuilds the playlist catalog from the music
//! directory and exits without starting the UI.

mod catalog;
mod commander;
mod components;
mod config;
mod db;
mod events;
mod logging;
mod lyrics;
mod model;
mod player;
mod render;
mod session;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result, bail};
use crossterm::event::{self, KeyEventKind};
use ratatui::layout::Rect;
use std::{
    path::Path,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    catalog::Catalog,
    commander::Commander,
    components::{NowPlayingView, PlaylistsView, SearchBar, SongListView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{navigation::Navigation, session::PlaybackSession},
    player::{AudioPlayer, PlayerState},
    session::SessionController,
    tasks::AppTask,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

type Session = SessionController<AudioPlayer, NowPlayingView, Sender<AppTask>>;

/// The pane that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Playlists,
    Songs,
    Lyrics,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Playlists => Focus::Songs,
            Focus::Songs => Focus::Lyrics,
            Focus::Lyrics => Focus::Playlists,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Playlists => Focus::Lyrics,
            Focus::Songs => Focus::Playlists,
            Focus::Lyrics => Focus::Songs,
        }
    }
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub catalog: Catalog,
    pub navigation: Navigation,
    pub session: Session,

    pub playlists_view: PlaylistsView,
    pub song_list: SongListView,
    pub search: SearchBar,
    pub commander: Commander,

    pub player_state: PlayerState,
    /// Last message or error, shown until the next key press.
    pub status: Option<String>,
    /// Where the progress gauge was drawn in the last frame.
    pub progress_area: Rect,
    /// Row of a left button press that started over the lyrics.
    pub lyric_press: Option<u16>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, catalog: Catalog, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let session = SessionController::new(
            PlaybackSession::new(),
            AudioPlayer::new(event_tx.clone()),
            NowPlayingView::new(),
            task_tx.clone(),
            &config.lyric_extension,
            config.scroll_damping,
        );

        let mut navigation = Navigation::new();
        if let Some(first) = catalog.playlists().first() {
            navigation.select(&catalog, &first.id);
        }

        let mut playlists_view = PlaylistsView::new();
        playlists_view.set_catalog(&catalog, navigation.token());

        let mut song_list = SongListView::new();
        if let Some(playlist) = navigation.token().and_then(|id| catalog.playlist(id)) {
            song_list.show_playlist(playlist);
        }

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Songs,
            event_tx,
            event_rx,
            task_tx,
            catalog,
            navigation,
            session,
            playlists_view,
            song_list,
            search: SearchBar::new(),
            commander: Commander::new(),
            player_state: PlayerState::Stopped,
            status: None,
            progress_area: Rect::default(),
            lyric_press: None,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and configuration, then either rebuilds the catalog (for
/// `lyrebird scan`) or runs the player UI until the user quits.
fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {e:#}");
    }

    let config = config::load_config();

    let mut args = std::env::args().skip(1);
    match (args.next().as_deref(), args.next()) {
        (None, _) => {}
        (Some("scan"), None) => return scan(&config),
        _ => bail!("Usage: lyrebird [scan]"),
    }

    let catalog = Catalog::load(Path::new(&config.catalog_file)).with_context(|| {
        format!(
            "Failed to load catalog {}, run `lyrebird scan` to build it",
            config.catalog_file
        )
    })?;

    tracing::info!(
        playlists = catalog.playlists().len(),
        songs = catalog.all_songs().len(),
        "Catalog loaded"
    );

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, catalog, task_tx);

    let mut terminal = setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Rebuilds the catalog file from the music directory.
fn scan(config: &AppConfig) -> Result<()> {
    let catalog = tasks::rebuild_catalog(Path::new(&config.music_dir), Path::new(&config.catalog_file))?;

    println!(
        "Wrote {} ({} playlists, {} songs)",
        config.catalog_file,
        catalog.playlists().len(),
        catalog.all_songs().len()
    );

    Ok(())
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s.
/// * An input thread to poll for terminal key and mouse events.
/// * A tick thread to trigger periodic UI refreshes.
/// * A save thread that periodically asks for the session to be persisted.
///
/// After spawning the workers, it asks for the previous session to be
/// restored and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Tui, app: &mut App, task_rx: Receiver<AppTask>) -> Result<()> {
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(event::Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(event::Event::Resize(..)) => AppEvent::Tick,
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = ?e, "Failed to read terminal input");
                    continue;
                }
            };

            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Periodic tick, effectively the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    let tick = Duration::from_millis(app.config.tick_millis);
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick);
        }
    });

    let tx_save = app.event_tx.clone();
    let save_interval = Duration::from_secs(app.config.save_interval_secs.max(1));
    thread::spawn(move || {
        loop {
            thread::sleep(save_interval);
            if tx_save.send(AppEvent::SaveTick).is_err() {
                break;
            }
        }
    });

    app.task_tx.send(AppTask::RestoreSession)?;

    process_events(terminal, app)
}
