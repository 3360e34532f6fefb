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

//! Persisted data models.

use rusqlite::Row;

/// Where playback was when the session was last saved.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SessionRecord {
    pub(crate) playlist_id: String,
    pub(crate) index: usize,
    pub(crate) time: f64,
}

impl SessionRecord {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let index: i64 = row.get("song_index")?;

        Ok(Self {
            playlist_id: row.get("playlist_id")?,
            index: usize::try_from(index).unwrap_or(usize::MAX),
            time: row.get("position")?,
        })
    }
}
