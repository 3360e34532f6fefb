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

//! UI rendering logic for the song table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::SongTable, model::Song, render::icons::ICON_PLAY, theme::Theme};

impl SongTable<'_> {
    /// Draws the table, marking the row that holds `playing`.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, playing: Option<&Song>) {
        *self.area = area;

        let rows = self.songs.iter().enumerate().map(|(row, song)| {
            let is_playing = playing.is_some_and(|p| p.file == song.file);
            let marker = if is_playing {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let title_style = if is_playing {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.table_title_fg)
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(
                    Line::from(format!("{:02}", row + 1))
                        .style(Style::default().fg(theme.table_number_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(Line::from(song.title.as_str()).style(title_style)),
                Cell::from(Line::from(song.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(song.album_or_default()).style(Style::default().fg(theme.table_album_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Percentage(45),
                Constraint::Percentage(25),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Album"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
