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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event.

mod commander;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App, Focus,
    render::{commander::draw_commander, player::draw_player},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Playlists run down the left, the song list sits in the middle and the
/// now-playing pane with its lyrics fills the rest. The player bar and the
/// command line sit underneath.
///
/// Drawing also records where things ended up on screen, since mouse input
/// is resolved against the last frame.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Percentage(45),
            Constraint::Min(0),
        ])
        .split(outer[0]);

    app.playlists_view.draw(
        f,
        main[0],
        &app.theme,
        app.focus == Focus::Playlists,
        app.navigation.token(),
    );

    app.song_list.draw(
        f,
        main[1],
        &app.theme,
        app.focus == Focus::Songs,
        app.session.current(),
    );

    app.session.renderer_mut().draw(f, main[2], &app.theme);

    let progress_area = draw_player(f, outer[1], app);
    app.progress_area = progress_area;

    draw_commander(f, outer[2], app);
}
