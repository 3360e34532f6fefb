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

//! Terminal lifecycle and styling.
//!
//! Entering the TUI switches to raw mode, the alternate screen and mouse
//! capture; leaving it undoes all of that on a best-effort basis. The
//! background colour is set with OSC escape sequences, which most modern
//! terminals (XTerm, iTerm2, Alacritty, Kitty) understand.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::theme::Theme;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the TUI application.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
pub(crate) fn setup_terminal(theme: &Theme) -> Result<Tui> {
    // Without this the window keeps a thin outline in the default background
    if let Some(hex) = Theme::to_hex(theme.background_colour) {
        set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Restores the terminal to its original state.
///
/// This does not return a result as it runs during cleanup, where there is
/// nothing left to do about a failure.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Sets the terminal background colour (OSC 11).
fn set_terminal_bg(hex_color: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]11;{}\x07", hex_color);
    let _ = stdout.flush();
}

/// Reverts the terminal background to the user's configuration (OSC 111).
fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]111\x07");
    let _ = stdout.flush();
}
