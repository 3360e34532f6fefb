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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line: a text input component that,
//! once a command is submitted, dispatches the corresponding application
//! event.
//!
//! | Command              | Effect                              |
//! |----------------------|-------------------------------------|
//! | `q`                  | quit                                |
//! | `scan`               | rebuild the catalog from disk       |
//! | `mode <name>`        | `sequence`, `single`, `random_list` or `random_all` |
//! | `pl <playlist>`      | browse a playlist                   |
//! | `resync`             | return the lyrics to automatic sync |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, model::session::PlayMode};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles `event`, returning `true` if the command line consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
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
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.active = false;
                self.input.reset();

                if !buffer.is_empty() {
                    let event = parse_command(&buffer).unwrap_or_else(AppEvent::Error);
                    event_tx.send(event)?;
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

/// Translates a command line into the event that carries it out.
fn parse_command(buffer: &str) -> Result<AppEvent, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] => Ok(AppEvent::ExitApplication),

        ["scan"] => Ok(AppEvent::ScanCatalog),

        ["resync"] => Ok(AppEvent::Resync),

        ["mode", name] => name.parse::<PlayMode>().map(AppEvent::SetPlayMode),
        ["mode", ..] => Err("Usage: mode <sequence|single|random_list|random_all>".to_string()),

        ["pl", name_parts @ ..] if !name_parts.is_empty() => Ok(AppEvent::Navigate(name_parts.join(" "))),
        ["pl"] => Err("Usage: pl <playlist>".to_string()),

        [cmd, ..] => Err(format!("Unknown command: {}", cmd)),

        [] => Err("Empty command".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn parses_commands() {
        assert!(matches!(parse_command("q"), Ok(AppEvent::ExitApplication)));
        assert!(matches!(parse_command("scan"), Ok(AppEvent::ScanCatalog)));
        assert!(matches!(parse_command("resync"), Ok(AppEvent::Resync)));
        assert!(matches!(
            parse_command("mode random_all"),
            Ok(AppEvent::SetPlayMode(PlayMode::RandomAll))
        ));
        assert!(matches!(parse_command("pl Road  Trip"), Ok(AppEvent::Navigate(name)) if name == "Road Trip"));
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(parse_command("mode loud").err().as_deref(), Some("Unknown play mode: loud"));
        assert!(parse_command("mode").is_err());
        assert!(parse_command("pl").is_err());
        assert_eq!(parse_command("dance").err().as_deref(), Some("Unknown command: dance"));
    }

    #[test]
    fn submitting_sends_event_and_closes() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap());
        commander.handle_event(&key(KeyCode::Char('q')), &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap();

        assert!(!commander.active());
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn inactive_commander_ignores_keys() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        let handled = commander
            .handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)), &event_tx)
            .unwrap();

        assert!(!handled);
        assert!(event_rx.try_recv().is_err());
    }
}
