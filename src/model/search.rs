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

//! Song search.
//!
//! A plain case-insensitive substring match over the title and artist of
//! every song in the catalog.

use crate::model::Song;

/// Returns the songs whose title or artist contains `query`, in catalog
/// order. A blank query matches nothing; callers fall back to the navigated
/// playlist instead.
pub(crate) fn filter_songs(songs: &[Song], query: &str) -> Vec<Song> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    songs
        .iter()
        .filter(|s| s.title.to_lowercase().contains(&query) || s.artist.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
