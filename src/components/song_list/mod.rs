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

//! The song list pane.
//!
//! Lists either the songs of the playlist being browsed or the results of a
//! search, in a [`SongTableState`].

mod event;
mod render;

use crate::{components::SongTableState, model::{Playlist, Song}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SongListSource {
    Empty,
    Playlist(String),
    Search(String),
}

pub(crate) struct SongListView {
    pub(crate) source: SongListSource,
    pub(crate) table: SongTableState,
}

impl SongListView {
    pub(crate) fn new() -> Self {
        Self {
            source: SongListSource::Empty,
            table: SongTableState::new(),
        }
    }

    pub(crate) fn show_playlist(&mut self, playlist: &Playlist) {
        self.source = SongListSource::Playlist(playlist.id.clone());
        self.table.set_songs(playlist.songs.clone());
    }

    pub(crate) fn show_search(&mut self, query: &str, results: Vec<Song>) {
        self.source = SongListSource::Search(query.to_string());
        self.table.set_songs(results);
    }

    pub(crate) fn clear(&mut self) {
        self.source = SongListSource::Empty;
        self.table.set_songs(vec![]);
    }

    pub(crate) fn is_search(&self) -> bool {
        matches!(self.source, SongListSource::Search(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::playlist;

    #[test]
    fn search_replaces_playlist_listing() {
        let mut view = SongListView::new();
        let rock = playlist("Rock", &["a", "b"]);

        view.show_playlist(&rock);
        assert_eq!(view.source, SongListSource::Playlist("Rock".into()));
        assert!(!view.is_search());

        view.show_search("b", vec![rock.songs[1].clone()]);
        assert!(view.is_search());
        assert_eq!(view.table.songs().len(), 1);
        assert_eq!(view.table.selected(), Some(0));
    }
}
