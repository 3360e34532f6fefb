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

//! Music catalog.
//!
//! The catalog is a JSON document mapping playlist names to ordered song
//! records. It is loaded once at startup, and can be regenerated from a music
//! directory with [`scan`].
//!
//! ```json
//! {
//!   "Rock": [
//!     { "title": "One", "artist": "Band", "album": "Debut",
//!       "file": "music/Rock/one.mp3", "cover": "music/Rock/cover.jpg" }
//!   ]
//! }
//! ```

pub(crate) mod scan;

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Playlist, Song};

/// Playlists keyed by name, in name order.
pub(crate) type CatalogDocument = BTreeMap<String, Vec<SongRecord>>;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("Failed to read catalog {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse catalog {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A song as stored in the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SongRecord {
    pub(crate) title: String,
    pub(crate) artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) album: Option<String>,
    pub(crate) file: String,
    pub(crate) cover: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    playlists: Vec<Playlist>,
    all_songs: Vec<Song>,
}

impl Catalog {
    /// Reads and parses the catalog document at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or is not a
    /// valid catalog document.
    pub(crate) fn load(path: &Path) -> Result<Self, CatalogError> {
        let display = path.display().to_string();

        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;

        let document: CatalogDocument = serde_json::from_str(&json)
            .map_err(|source| CatalogError::Parse { path: display, source })?;

        Ok(Self::from_document(document))
    }

    pub(crate) fn from_document(document: CatalogDocument) -> Self {
        let playlists = document
            .into_iter()
            .map(|(id, records)| {
                let songs = records
                    .into_iter()
                    .enumerate()
                    .map(|(song_index, record)| Song {
                        file: record.file,
                        title: record.title,
                        artist: record.artist,
                        album: record.album,
                        cover: record.cover,
                        playlist_id: id.clone(),
                        song_index,
                    })
                    .collect();
                Playlist { id, songs }
            })
            .collect();

        Self::from_playlists(playlists)
    }

    pub(crate) fn from_playlists(playlists: Vec<Playlist>) -> Self {
        let all_songs = playlists
            .iter()
            .flat_map(|p| p.songs.iter().cloned())
            .collect();

        Self { playlists, all_songs }
    }

    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Every song of every playlist, playlists in name order.
    pub(crate) fn all_songs(&self) -> &[Song] {
        &self.all_songs
    }
}

/// Writes `document` as pretty-printed JSON to `path`.
pub(crate) fn save_document(path: &Path, document: &CatalogDocument) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}
