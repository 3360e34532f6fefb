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

//! Time-synchronised lyrics.
//!
//! # Organization
//!
//! * [`parser`]: Parses LRC timed text into an ordered list of lines.
//! * [`sync`]: Maps playback time to the active line and keeps it centred.
//! * [`scroll`]: Arbitrates manual scrolling against automatic sync.
//! * [`source`]: Locates and reads the lyric file belonging to a song.

pub(crate) mod parser;
pub(crate) mod scroll;
pub(crate) mod source;
pub(crate) mod sync;

/// One timestamped line of lyrics.
///
/// Texts that share the exact same timestamp are merged into one line: the
/// first text encountered is the primary text, later ones (typically
/// translations) are kept in order as alternates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LyricLine {
    time_ms: u64,
    text: String,
    alternates: Vec<String>,
}

impl LyricLine {
    pub(crate) fn new(time_ms: u64, text: impl Into<String>) -> Self {
        Self {
            time_ms,
            text: text.into(),
            alternates: Vec::new(),
        }
    }

    /// Start time in seconds.
    pub(crate) fn time(&self) -> f64 {
        self.time_ms as f64 / 1000.0
    }

    pub(crate) fn time_ms(&self) -> u64 {
        self.time_ms
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn alternates(&self) -> &[String] {
        &self.alternates
    }

    pub(crate) fn push_alternate(&mut self, text: impl Into<String>) {
        self.alternates.push(text.into());
    }

    /// The primary text followed by each alternate in parentheses.
    pub(crate) fn display_text(&self) -> String {
        self.alternates
            .iter()
            .fold(self.text.clone(), |acc, alt| format!("{acc} ({alt})"))
    }
}

/// Lyrics of the current song, as far as they are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LyricStatus {
    Loading,
    Unavailable,
    Ready(Vec<LyricLine>),
}

impl LyricStatus {
    /// Wraps parsed lines, an empty list meaning there are no lyrics to show.
    pub(crate) fn from_lines(lines: Vec<LyricLine>) -> Self {
        if lines.is_empty() {
            LyricStatus::Unavailable
        } else {
            LyricStatus::Ready(lines)
        }
    }

    pub(crate) fn lines(&self) -> &[LyricLine] {
        match self {
            LyricStatus::Ready(lines) => lines,
            LyricStatus::Loading | LyricStatus::Unavailable => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_appends_alternates_in_order() {
        let mut line = LyricLine::new(1500, "Hello");
        assert_eq!(line.display_text(), "Hello");

        line.push_alternate("Bonjour");
        line.push_alternate("Hola");
        assert_eq!(line.display_text(), "Hello (Bonjour) (Hola)");
        assert_eq!(line.time(), 1.5);
    }

    #[test]
    fn empty_lines_mean_unavailable() {
        assert_eq!(LyricStatus::from_lines(vec![]), LyricStatus::Unavailable);
        assert!(LyricStatus::Loading.lines().is_empty());

        let ready = LyricStatus::from_lines(vec![LyricLine::new(0, "a")]);
        assert_eq!(ready.lines().len(), 1);
    }
}
