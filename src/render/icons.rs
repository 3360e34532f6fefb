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

//! Unicode symbols for the TUI.
//!
//! Text-style variants (Variation Selector-15, `\u{FE0E}`) keep terminals
//! from rendering these as colour emoji, so they follow the theme.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}\u{FE0E}";
pub(crate) const ICON_STOP: &str = "\u{23F9}\u{FE0E}";

pub(crate) const ICON_SEQUENCE: &str = "\u{1F501}\u{FE0E}";
pub(crate) const ICON_SINGLE: &str = "\u{1F502}\u{FE0E}";
pub(crate) const ICON_SHUFFLE: &str = "\u{1F500}\u{FE0E}";
