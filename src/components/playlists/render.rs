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

//! UI rendering logic for the playlist sidebar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{components::PlaylistsView, theme::Theme};

impl PlaylistsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool, browsing: Option<&str>) {
        let border_colour = if focused { theme.accent_colour } else { theme.border_colour };

        let block = Block::default()
            .title(" Playlists ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour));
        self.area = block.inner(area);

        let items: Vec<ListItem> = self
            .ids
            .iter()
            .map(|id| {
                let style = if browsing == Some(id.as_str()) {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.table_title_fg)
                };
                ListItem::new(id.as_str()).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
