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

//! Keyboard routing.
//!
//! A key goes to the first of these that wants it: the `:` command line, the
//! `/` search prompt, the focused pane, then the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App, Focus,
    events::{AppEvent, AppEventProcessor},
    lyrics::scroll::ScrollGesture,
    model::session::Direction,
};

use super::handlers::{handle_cycle_play_mode, handle_resync};

/// Maps keyboard input to application actions and playback commands.
///
/// # Errors
///
/// Returns an error if an event cannot be sent or the audio player rejects a
/// command.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if app.search.handle_event(&event, &app.event_tx)? {
        if key.code == KeyCode::Enter {
            app.focus = Focus::Songs;
        }
        return Ok(());
    }

    app.status = None;

    match app.focus {
        Focus::Playlists => app.playlists_view.process_event(&event, &app.event_tx)?,
        Focus::Songs => app.song_list.process_event(&event, &app.event_tx)?,
        Focus::Lyrics => process_lyrics_key_event(app, key)?,
    }

    process_global_key_event(app, key)
}

fn process_lyrics_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let step = app.config.wheel_step;

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.session.handle_gesture(ScrollGesture::Wheel(step));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.session.handle_gesture(ScrollGesture::Wheel(-step));
        }
        KeyCode::Enter => {
            if let Some(index) = app.session.renderer().centre_line() {
                app.session.seek_to_line(index)?;
            }
        }
        _ => {}
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let fine_seek = app.config.seek_step_secs;
    let seek = app.config.long_seek_step_secs;

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.previous(),

        KeyCode::Char(' ') => app.session.toggle_play()?,
        KeyCode::Char('n') => app.session.handle_track_change(Direction::Next, false)?,
        KeyCode::Char('p') => app.session.handle_track_change(Direction::Previous, false)?,
        KeyCode::Char('m') => handle_cycle_play_mode(app),
        KeyCode::Char('r') => handle_resync(app),

        KeyCode::Char(',') => app.session.seek_relative(-fine_seek)?,
        KeyCode::Char('.') => app.session.seek_relative(fine_seek)?,
        KeyCode::Char('<') => app.session.seek_relative(-seek)?,
        KeyCode::Char('>') => app.session.seek_relative(seek)?,

        _ => {}
    }

    Ok(())
}
