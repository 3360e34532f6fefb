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

//! Event routing for the song list.
//!
//! Keyboard input goes to the song table; activating a row asks for that
//! song to be played from its own playlist, which also covers search results.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::Event;

use crate::{
    components::{SongListView, SongTableAction},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SongListView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(SongTableAction::Activate(row)) = self.table.as_widget().process_event(event) {
            self.activate(row, event_tx)?;
        }

        Ok(())
    }
}

impl SongListView {
    pub(crate) fn activate(&mut self, row: usize, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Some(song) = self.table.song(row) else {
            return Ok(());
        };
        let event = AppEvent::PlaySong {
            playlist_id: song.playlist_id.clone(),
            index: song.song_index,
        };

        self.table.select(row);
        event_tx.send(event)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::fixtures::{playlist, song};

    #[test]
    fn activating_search_result_plays_from_its_playlist() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut view = SongListView::new();
        view.show_search("x", vec![song("Jazz", 4, "x1"), song("Rock", 2, "x2")]);

        view.process_event(&Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)), &event_tx)
            .unwrap();
        view.process_event(&Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), &event_tx)
            .unwrap();

        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::PlaySong { playlist_id, index: 2 }) if playlist_id == "Rock"
        ));
    }

    #[test]
    fn activating_missing_row_sends_nothing() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut view = SongListView::new();
        view.show_playlist(&playlist("Rock", &["a"]));

        view.activate(3, &event_tx).unwrap();

        assert!(event_rx.try_recv().is_err());
    }
}
