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

//! Playlist sidebar.
//!
//! Lists the playlists of the catalog. The highlighted entry moves with the
//! keyboard; choosing an entry changes the navigation token, which decides
//! what the song list shows.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::ListState};

use crate::catalog::Catalog;

pub(crate) struct PlaylistsView {
    ids: Vec<String>,
    list_state: ListState,
    area: Rect,
}

impl PlaylistsView {
    pub(crate) fn new() -> Self {
        Self {
            ids: vec![],
            list_state: ListState::default(),
            area: Rect::default(),
        }
    }

    /// Lists the playlists of `catalog`, highlighting `current` if given.
    pub(crate) fn set_catalog(&mut self, catalog: &Catalog, current: Option<&str>) {
        self.ids = catalog.playlists().iter().map(|p| p.id.clone()).collect();
        self.list_state = ListState::default();
        match current {
            Some(id) => self.highlight(id),
            None if !self.ids.is_empty() => self.list_state.select(Some(0)),
            None => {}
        }
    }

    pub(crate) fn highlight(&mut self, id: &str) {
        if let Some(index) = self.ids.iter().position(|p| p == id) {
            self.list_state.select(Some(index));
        }
    }

    pub(crate) fn highlighted(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.ids.get(i))
            .map(String::as_str)
    }

    /// The playlist under the terminal cell at `column`, `row`, as of the
    /// last draw.
    pub(crate) fn playlist_at(&self, column: u16, row: u16) -> Option<&str> {
        if column < self.area.x || column >= self.area.right() || row < self.area.y || row >= self.area.bottom() {
            return None;
        }

        let index = self.list_state.offset() + usize::from(row - self.area.y);
        self.ids.get(index).map(String::as_str)
    }

    fn move_by(&mut self, forward: bool) {
        let len = self.ids.len();
        if len == 0 {
            return;
        }

        let next = match (self.list_state.selected(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, _) => 0,
        };
        self.list_state.select(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::playlist;

    fn catalog() -> Catalog {
        Catalog::from_playlists(vec![
            playlist("Jazz", &["a"]),
            playlist("Pop", &["b"]),
            playlist("Rock", &["c"]),
        ])
    }

    #[test]
    fn highlights_current_playlist() {
        let mut view = PlaylistsView::new();

        view.set_catalog(&catalog(), Some("Pop"));
        assert_eq!(view.highlighted(), Some("Pop"));

        view.set_catalog(&catalog(), None);
        assert_eq!(view.highlighted(), Some("Jazz"));
    }

    #[test]
    fn movement_wraps() {
        let mut view = PlaylistsView::new();
        view.set_catalog(&catalog(), None);

        view.move_by(false);
        assert_eq!(view.highlighted(), Some("Rock"));

        view.move_by(true);
        assert_eq!(view.highlighted(), Some("Jazz"));
    }

    #[test]
    fn playlist_at_maps_rows() {
        let mut view = PlaylistsView::new();
        view.set_catalog(&catalog(), None);
        view.area = Rect::new(0, 2, 20, 5);

        assert_eq!(view.playlist_at(3, 3), Some("Pop"));
        assert_eq!(view.playlist_at(3, 5), None);
        assert_eq!(view.playlist_at(3, 1), None);
    }
}
