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

//! Input handling for the song table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! activation.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::components::{SongTable, SongTableAction};

impl SongTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SongTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.goto_last(),

            (KeyCode::Char('f'), KeyModifiers::CONTROL) | (KeyCode::PageDown, _) => {
                self.goto_forward(self.page_rows())
            }
            (KeyCode::Char('b'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => {
                self.goto_back(self.page_rows())
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => self.goto_forward(self.page_rows() / 2),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.goto_back(self.page_rows() / 2),

            (KeyCode::Enter, _) => {
                return self.table_state.selected().map(SongTableAction::Activate);
            }

            _ => {}
        }

        None
    }
}
