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

//! Render the music player bar.
//!
//! Shows the current song, playback state, play mode, elapsed time and a
//! progress bar that can be clicked to seek.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    model::session::PlayMode,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_SEQUENCE, ICON_SHUFFLE, ICON_SINGLE, ICON_STOP},
    util::format::{format_time, progress_ratio},
};

/// Renders the player bar and returns the area of its progress gauge.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) -> Rect {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let clock = app.session.clock();

    if let Some(song) = app.session.renderer().song() {
        let icon = match app.player_state {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Stopped => ICON_STOP,
        };

        let song_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), bold).fg(Color::White),
            Span::styled(song.title.as_str(), bold).fg(app.theme.accent_colour),
            Span::raw(" by "),
            Span::styled(song.artist.as_str(), bold).fg(app.theme.accent_colour),
            Span::raw(" from "),
            Span::styled(song.album_or_default(), bold).fg(app.theme.accent_colour),
        ]);
        f.render_widget(Paragraph::new(song_line), info_chunks[0]);

        let remaining = (clock.duration - clock.position).max(0.0);
        let time_line = Line::from(vec![
            Span::styled(format_time(clock.position), bold).fg(app.theme.accent_colour),
            Span::styled(" / ", bold).fg(Color::White),
            Span::styled(format_time(clock.duration), bold).fg(app.theme.accent_colour),
            Span::styled(" (-", bold).fg(Color::White),
            Span::styled(format_time(remaining), bold).fg(app.theme.accent_colour),
            Span::styled(")", bold).fg(Color::White),
        ]);
        f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);
    } else {
        f.render_widget(
            Paragraph::new(" Nothing playing").fg(app.theme.border_colour),
            info_chunks[0],
        );
    }

    let mode = app.session.play_mode();
    let mode_icon = match mode {
        PlayMode::Sequence => ICON_SEQUENCE,
        PlayMode::Single => ICON_SINGLE,
        PlayMode::RandomList | PlayMode::RandomAll => ICON_SHUFFLE,
    };
    let mode_line = Line::from(vec![
        Span::styled(format!(" {} ", mode_icon), bold).fg(Color::White),
        Span::styled(mode.to_string(), bold).fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(mode_line), chunks[1]);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(progress_ratio(clock.position, clock.duration))
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[2]);

    chunks[2]
}
