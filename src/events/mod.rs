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

//! Application events and the main event loop.
//!
//! Every state change of the application happens here, on the main thread,
//! one event at a time. Events come from the terminal input thread, the tick
//! threads, the audio player worker and the task worker.
//!
//! # Organization
//!
//! * [`key_handlers`]: Routes keyboard input to the command line, the search
//!   prompt, the focused pane and finally the global key bindings.
//! * [`mouse_handlers`]: Wheel and drag over the lyrics, clicks on lyric
//!   lines, the progress bar, playlists and songs.
//! * [`handlers`]: Everything else.

mod handlers;
mod key_handlers;
mod mouse_handlers;

use handlers::*;
use key_handlers::process_key_event;
use mouse_handlers::process_mouse_event;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseEvent};

use crate::{
    App,
    catalog::Catalog,
    db::SessionRecord,
    lyrics::{LyricLine, source::LyricToken},
    model::session::PlayMode,
    player::PlayerState,
    render::draw,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Navigate(String),
    PlaySong { playlist_id: String, index: usize },
    SearchChanged(String),
    SearchClosed,
    SetPlayMode(PlayMode),
    Resync,
    ScanCatalog,

    CatalogUpdated(Catalog),
    LyricsLoaded {
        token: LyricToken,
        lines: Option<Vec<LyricLine>>,
    },
    SessionRestored(Option<SessionRecord>),

    PlayerStateChanged(PlayerState),
    DurationChanged(f64),
    TimeChanged(f64),
    TrackFinished,

    Tick,
    SaveTick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// A component that reacts to terminal input by mutating itself and sending
/// application events.
pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel is
/// closed.
///
/// # Errors
///
/// Returns an error on a fatal worker failure, or if an event cannot be
/// handled.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => anyhow::bail!(message),

            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,

            AppEvent::Navigate(playlist_id) => handle_navigate(app, &playlist_id),
            AppEvent::PlaySong { playlist_id, index } => handle_play_song(app, &playlist_id, index)?,
            AppEvent::SearchChanged(query) => handle_search_changed(app, &query),
            AppEvent::SearchClosed => handle_search_closed(app),
            AppEvent::SetPlayMode(mode) => handle_set_play_mode(app, mode),
            AppEvent::Resync => handle_resync(app),
            AppEvent::ScanCatalog => handle_scan_catalog(app)?,

            AppEvent::CatalogUpdated(catalog) => handle_catalog_updated(app, catalog),
            AppEvent::LyricsLoaded { token, lines } => handle_lyrics_loaded(app, token, lines),
            AppEvent::SessionRestored(record) => handle_session_restored(app, record)?,

            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(seconds) => handle_time_changed(app, seconds),
            AppEvent::TrackFinished => handle_track_finished(app)?,

            AppEvent::Tick => {}
            AppEvent::SaveTick => handle_save_tick(app)?,

            AppEvent::Error(message) => handle_error(app, message),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
