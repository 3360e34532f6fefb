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

//! Playlist navigation state.
//!
//! Navigation is a single token naming the playlist currently being browsed.
//! Changing the token changes which songs the playlist view lists; it does
//! not change what is playing.

use crate::catalog::Catalog;

#[derive(Debug, Default)]
pub(crate) struct Navigation {
    token: Option<String>,
}

impl Navigation {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Points navigation at `playlist_id`, returning `true` when the token
    /// names a playlist of the catalog. Unknown playlists are ignored.
    pub(crate) fn select(&mut self, catalog: &Catalog, playlist_id: &str) -> bool {
        if catalog.playlist(playlist_id).is_none() {
            return false;
        }

        self.token = Some(playlist_id.to_string());
        true
    }

    /// Drops the token if it no longer names a playlist, e.g. after the
    /// catalog is rebuilt.
    pub(crate) fn revalidate(&mut self, catalog: &Catalog) {
        if let Some(token) = &self.token {
            if catalog.playlist(token).is_none() {
                self.token = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::playlist;

    #[test]
    fn only_known_playlists_are_selected() {
        let catalog = Catalog::from_playlists(vec![playlist("Rock", &["a"])]);
        let mut navigation = Navigation::new();

        assert!(!navigation.select(&catalog, "Jazz"));
        assert_eq!(navigation.token(), None);

        assert!(navigation.select(&catalog, "Rock"));
        assert_eq!(navigation.token(), Some("Rock"));
    }

    #[test]
    fn revalidate_drops_vanished_playlist() {
        let mut navigation = Navigation::new();
        navigation.select(&Catalog::from_playlists(vec![playlist("Rock", &["a"])]), "Rock");

        navigation.revalidate(&Catalog::from_playlists(vec![playlist("Jazz", &["b"])]));

        assert_eq!(navigation.token(), None);
    }
}
