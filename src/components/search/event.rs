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

//! Input handling for the search prompt.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::SearchBar, events::AppEvent};

impl SearchBar {
    /// Handles `event`, returning `true` if the search prompt consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char('/') {
                self.active = true;
                self.input.reset();
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
                event_tx.send(AppEvent::SearchClosed)?;
            }

            KeyCode::Enter => {
                self.active = false;
            }

            _ => {
                if self.input.handle_event(event).is_some_and(|changed| changed.value) {
                    event_tx.send(AppEvent::SearchChanged(self.input.value().to_string()))?;
                }
            }
        }

        Ok(true)
    }
}
