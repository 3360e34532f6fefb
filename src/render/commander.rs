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

//! Render the bottom line.
//!
//! The line doubles as the `/` search prompt, the `:` command line and a
//! status line for messages and errors.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};
use tui_input::Input;

use crate::App;

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);
    let area = container[0];

    let style = Style::default()
        .fg(app.theme.commander_colour)
        .bg(app.theme.gauge_track_colour);

    if app.commander.active() {
        draw_prompt(f, area, style, ':', &app.commander.input);
    } else if app.search.active() {
        draw_prompt(f, area, style, '/', &app.search.input);
    } else if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(status.as_str()).style(style.fg(app.theme.error_colour)),
            area,
        );
    } else if !app.search.input.value().is_empty() {
        f.render_widget(
            Paragraph::new(format!("/{}", app.search.input.value())).style(style),
            area,
        );
    } else {
        f.render_widget(Paragraph::new("").style(style), area);
    }
}

fn draw_prompt(f: &mut Frame, area: Rect, style: Style, prompt: char, input: &Input) {
    f.render_widget(
        Paragraph::new(format!("{}{}", prompt, input.value())).style(style),
        area,
    );

    let cursor_x = area.x + 1 + input.cursor() as u16;
    f.set_cursor_position((cursor_x, area.y));
}
