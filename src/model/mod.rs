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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the songs
//! and playlists of the catalog, along with the playback session state
//! machine that navigates them.

pub(crate) mod navigation;
pub(crate) mod search;
pub(crate) mod session;

use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

/// Compact identity of a song, derived from its (unique) file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SongId(u64);

impl SongId {
    pub(crate) fn for_file(file: &str) -> Self {
        Self(xxh3_64(file.as_bytes()))
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A single playable entry of the catalog.
///
/// The `file` path is the identity of a song across playlists, the same file
/// is expected to appear at most once in the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Song {
    pub(crate) file: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: Option<String>,
    pub(crate) cover: String,
    pub(crate) playlist_id: String,
    pub(crate) song_index: usize,
}

impl Song {
    pub(crate) fn id(&self) -> SongId {
        SongId::for_file(&self.file)
    }

    pub(crate) fn album_or_default(&self) -> &str {
        self.album.as_deref().unwrap_or("Unknown Album")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Playlist {
    pub(crate) id: String,
    pub(crate) songs: Vec<Song>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Playlist, Song};

    pub(crate) fn song(playlist_id: &str, song_index: usize, title: &str) -> Song {
        Song {
            file: format!("music/{playlist_id}/{title}.mp3"),
            title: title.to_string(),
            artist: format!("{title} Artist"),
            album: None,
            cover: format!("music/{playlist_id}/cover.jpg"),
            playlist_id: playlist_id.to_string(),
            song_index,
        }
    }

    pub(crate) fn playlist(id: &str, titles: &[&str]) -> Playlist {
        Playlist {
            id: id.to_string(),
            songs: titles
                .iter()
                .enumerate()
                .map(|(i, title)| song(id, i, title))
                .collect(),
        }
    }
}
