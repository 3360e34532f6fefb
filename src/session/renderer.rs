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

//! The presentation capability consumed by the session controller.
//!
//! The controller and the lyric sync engine never touch widgets directly; they
//! push state through [`Renderer`] and query it for line geometry, which keeps
//! the playback core independent of the terminal UI.

use crate::{lyrics::LyricStatus, model::Song};

/// Vertical placement of one lyric line, in the renderer's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineGeometry {
    pub(crate) top: f64,
    pub(crate) height: f64,
}

pub(crate) trait Renderer {
    /// Shows the metadata (title, artist, album, cover) of the current song.
    fn show_song(&mut self, song: &Song);

    fn show_lyrics(&mut self, status: &LyricStatus);

    /// Highlights the line at `index` as the only active line, or clears the
    /// highlight.
    fn show_active_line(&mut self, index: Option<usize>);

    fn set_scroll_offset(&mut self, offset: f64);

    fn show_resync_affordance(&mut self, visible: bool);

    fn viewport_height(&self) -> f64;

    /// Geometry of the line at `index` relative to the top of the unscrolled
    /// lyric track, if the line is laid out.
    fn line_geometry(&self, index: usize) -> Option<LineGeometry>;
}
