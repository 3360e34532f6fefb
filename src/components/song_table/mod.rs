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

//! Interactive song table widget and state management.
//!
//! This module provides a reusable table component for displaying and
//! choosing songs. It separates persistent state (`SongTableState`) from the
//! transient widget view (`SongTable`), and reports activation through
//! [`SongTableAction`] rather than acting on it.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::TableState};

use crate::model::Song;

/// Rows taken by the header, including its bottom margin.
const HEADER_ROWS: u16 = 2;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SongTableAction {
    /// The song at this row was chosen for playback.
    Activate(usize),
}

pub(crate) struct SongTableState {
    songs: Vec<Song>,
    table_state: TableState,
    area: Rect,
}

impl SongTableState {
    pub(crate) fn new() -> Self {
        Self {
            songs: vec![],
            table_state: TableState::new(),
            area: Rect::default(),
        }
    }

    /// Replaces the listed songs, selecting the first one.
    pub(crate) fn set_songs(&mut self, songs: Vec<Song>) {
        self.table_state = TableState::new();
        if !songs.is_empty() {
            self.table_state.select(Some(0));
        }
        self.songs = songs;
    }

    pub(crate) fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub(crate) fn song(&self, row: usize) -> Option<&Song> {
        self.songs.get(row)
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn select(&mut self, row: usize) {
        if row < self.songs.len() {
            self.table_state.select(Some(row));
        }
    }

    /// The song row under the terminal cell at `column`, `row`, as of the last
    /// draw.
    pub(crate) fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let body_top = self.area.y.saturating_add(HEADER_ROWS);
        if column < self.area.x
            || column >= self.area.right()
            || row < body_top
            || row >= self.area.bottom()
        {
            return None;
        }

        let index = self.table_state.offset() + usize::from(row - body_top);
        (index < self.songs.len()).then_some(index)
    }

    pub(crate) fn as_widget(&mut self) -> SongTable<'_> {
        SongTable {
            songs: &self.songs,
            table_state: &mut self.table_state,
            area: &mut self.area,
        }
    }
}

pub(crate) struct SongTable<'a> {
    songs: &'a [Song],
    table_state: &'a mut TableState,
    area: &'a mut Rect,
}

impl SongTable<'_> {
    fn page_rows(&self) -> usize {
        usize::from(self.area.height.saturating_sub(HEADER_ROWS)).max(1)
    }

    fn goto_next(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.songs.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.songs.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    fn goto_forward(&mut self, rows: usize) {
        if let Some(last) = self.songs.len().checked_sub(1) {
            let i = self.table_state.selected().unwrap_or(0).saturating_add(rows);
            self.table_state.select(Some(i.min(last)));
        }
    }

    fn goto_back(&mut self, rows: usize) {
        if !self.songs.is_empty() {
            let i = self.table_state.selected().unwrap_or(0).saturating_sub(rows);
            self.table_state.select(Some(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::playlist;

    fn table(titles: &[&str]) -> SongTableState {
        let mut state = SongTableState::new();
        state.set_songs(playlist("Rock", titles).songs);
        state
    }

    #[test]
    fn new_songs_select_first_row() {
        let state = table(&["a", "b"]);
        assert_eq!(state.selected(), Some(0));

        let empty = table(&[]);
        assert_eq!(empty.selected(), None);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut state = table(&["a", "b", "c"]);

        state.as_widget().goto_previous();
        assert_eq!(state.selected(), Some(2));

        state.as_widget().goto_next();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn paging_stops_at_the_ends() {
        let mut state = table(&["a", "b", "c", "d"]);

        state.as_widget().goto_forward(10);
        assert_eq!(state.selected(), Some(3));

        state.as_widget().goto_back(2);
        assert_eq!(state.selected(), Some(1));

        state.as_widget().goto_back(5);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn row_at_maps_below_header() {
        let mut state = table(&["a", "b", "c"]);
        state.area = Rect::new(10, 5, 40, 10);

        assert_eq!(state.row_at(12, 6), None);
        assert_eq!(state.row_at(12, 7), Some(0));
        assert_eq!(state.row_at(12, 9), Some(2));
        assert_eq!(state.row_at(12, 10), None);
        assert_eq!(state.row_at(60, 7), None);
    }
}
