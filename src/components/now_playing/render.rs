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

//! UI rendering logic for the now-playing pane.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::NowPlayingView,
    lyrics::LyricStatus,
    render::Render,
    theme::Theme,
};

impl Render for NowPlayingView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut block = Block::default()
            .title(" Lyrics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        if self.resync_visible {
            block = block.title_bottom(
                Line::from(Span::styled(" r: back to sync ", Style::default().fg(theme.accent_colour)))
                    .alignment(Alignment::Right),
            );
        }

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(inner);

        self.draw_header(f, chunks[0], theme);

        self.set_track_area(chunks[1]);
        self.draw_track(f, theme);
    }
}

impl NowPlayingView {
    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = match &self.song {
            Some(song) => vec![
                Line::from(Span::styled(
                    song.title.as_str(),
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(song.artist.as_str(), Style::default().fg(theme.table_artist_fg)),
                    Span::raw(" \u{00B7} "),
                    Span::styled(song.album_or_default(), Style::default().fg(theme.table_album_fg)),
                ]),
                Line::from(Span::styled(song.cover.as_str(), Style::default().fg(theme.lyric_dim_fg))),
            ],
            None => vec![Line::from(Span::styled(
                "Nothing playing",
                Style::default().fg(theme.lyric_dim_fg),
            ))],
        };

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_track(&self, f: &mut Frame, theme: &Theme) {
        let area = self.track_area;
        if area.height == 0 {
            return;
        }

        let placeholder = match (&self.song, &self.status) {
            (None, _) => None,
            (Some(_), LyricStatus::Loading) => Some("Loading lyrics..."),
            (Some(_), LyricStatus::Unavailable) => Some("No lyrics available"),
            (Some(_), LyricStatus::Ready(_)) => None,
        };

        if let Some(text) = placeholder {
            let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            f.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.lyric_dim_fg)),
                row,
            );
            return;
        }

        let offset = self.offset_rows();

        for (index, line) in self.layout.iter().enumerate() {
            let style = if self.active == Some(index) {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.lyric_fg)
            };

            for (r, text) in line.rows.iter().enumerate() {
                let y = i64::from(line.top) + r as i64 + offset;
                if y < 0 || y >= i64::from(area.height) {
                    continue;
                }

                let row = Rect::new(area.x, area.y + y as u16, area.width, 1);
                f.render_widget(
                    Paragraph::new(text.as_str())
                        .alignment(Alignment::Center)
                        .style(style),
                    row,
                );
            }
        }
    }
}
