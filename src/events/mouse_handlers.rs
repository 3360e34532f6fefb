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

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    App, Focus,
    lyrics::scroll::{GestureOutcome, ScrollGesture},
};

use super::handlers::handle_navigate;

/// Maps mouse input onto the panes under the pointer.
///
/// Wheel, press, drag and release over the lyric track feed the scroll
/// arbiter; a press that ends without a drag seeks to the line under it.
///
/// # Errors
///
/// Returns an error if an event cannot be sent or the audio player rejects a
/// command.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let (column, row) = (mouse.column, mouse.row);
    let over_lyrics = app.session.renderer().contains(column, row);
    let step = app.config.wheel_step;

    match mouse.kind {
        MouseEventKind::ScrollDown if over_lyrics => {
            app.session.handle_gesture(ScrollGesture::Wheel(step));
        }
        MouseEventKind::ScrollUp if over_lyrics => {
            app.session.handle_gesture(ScrollGesture::Wheel(-step));
        }

        MouseEventKind::Down(MouseButton::Left) => {
            if over_lyrics {
                app.focus = Focus::Lyrics;
                app.lyric_press = Some(row);
                app.session.handle_gesture(ScrollGesture::Press(f64::from(row)));
            } else if app.progress_area.contains(Position::new(column, row)) {
                let fraction = f64::from(column - app.progress_area.x) / f64::from(app.progress_area.width);
                app.session.seek_fraction(fraction)?;
            } else if let Some(id) = app.playlists_view.playlist_at(column, row).map(str::to_string) {
                app.focus = Focus::Playlists;
                handle_navigate(app, &id);
            } else if let Some(index) = app.song_list.table.row_at(column, row) {
                app.focus = Focus::Songs;
                app.song_list.activate(index, &app.event_tx)?;
            }
        }

        MouseEventKind::Drag(MouseButton::Left) if app.lyric_press.is_some() => {
            app.session.handle_gesture(ScrollGesture::Drag(f64::from(row)));
        }

        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(press_row) = app.lyric_press.take() {
                if app.session.handle_gesture(ScrollGesture::Release) == GestureOutcome::Click {
                    if let Some(index) = app.session.renderer().line_at(press_row) {
                        app.session.seek_to_line(index)?;
                    }
                }
            }
        }

        _ => {}
    }

    Ok(())
}
