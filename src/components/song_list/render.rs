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

//! UI rendering logic for the song list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{SongListSource, SongListView},
    model::Song,
    theme::Theme,
};

impl SongListView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool, playing: Option<&Song>) {
        let border_colour = if focused { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let count = self.table.songs().len();
        let header_text = match &self.source {
            SongListSource::Empty => "No playlist".to_string(),
            SongListSource::Playlist(id) => format!("{} | {} songs", id, count),
            SongListSource::Search(query) => format!("Search \"{}\" | {} results", query, count),
        };

        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.accent_colour))
            .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme.border_colour)));

        f.render_widget(header, chunks[0]);
        self.table.as_widget().draw(f, chunks[1], theme, playing);
    }
}
