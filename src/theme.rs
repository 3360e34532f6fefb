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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and converts colors
//! to the hexadecimal form used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) table_number_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_album_fg: Color,

    pub(crate) lyric_fg: Color,
    pub(crate) lyric_dim_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(28, 22, 40),
            accent_colour: Color::Rgb(208, 188, 255),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(48, 38, 66),
            commander_colour: Color::Rgb(230, 224, 233),
            error_colour: Color::Rgb(242, 184, 181),

            highlight_bg: Color::Rgb(103, 80, 164),
            highlight_fg: Color::Rgb(255, 255, 255),

            table_number_fg: Color::Rgb(162, 161, 166),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(255, 215, 0),
            table_album_fg: Color::Rgb(179, 157, 219),

            lyric_fg: Color::Rgb(202, 196, 208),
            lyric_dim_fg: Color::Rgb(120, 116, 126),
        }
    }

    /// Converts an RGB [`Color`] into a CSS-style hexadecimal string, as
    /// understood by terminal emulators. Other colors have no hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
