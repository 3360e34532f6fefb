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

//! Playback session state machine.
//!
//! This module owns the playlist currently being played, the position within
//! it, the play mode and the play/pause flag. Every transition that picks the
//! next song (manual navigation, automatic advance, play mode changes) lives
//! here; the session controller applies the side effects.

use std::{fmt, str::FromStr};

use rand::{SeedableRng, rng, rngs::StdRng, seq::IteratorRandom};

use crate::model::Song;

/// Policy governing which track follows the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum PlayMode {
    #[default]
    Sequence,
    Single,
    RandomList,
    RandomAll,
}

impl PlayMode {
    pub(crate) const ALL: [PlayMode; 4] = [
        PlayMode::Sequence,
        PlayMode::Single,
        PlayMode::RandomList,
        PlayMode::RandomAll,
    ];

    /// The mode that follows this one when cycling through modes.
    pub(crate) fn cycle(self) -> Self {
        match self {
            PlayMode::Sequence => PlayMode::Single,
            PlayMode::Single => PlayMode::RandomList,
            PlayMode::RandomList => PlayMode::RandomAll,
            PlayMode::RandomAll => PlayMode::Sequence,
        }
    }

    pub(crate) fn is_random(self) -> bool {
        matches!(self, PlayMode::RandomList | PlayMode::RandomAll)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            PlayMode::Sequence => "sequence",
            PlayMode::Single => "single",
            PlayMode::RandomList => "random_list",
            PlayMode::RandomAll => "random_all",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| format!("Unknown play mode: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Next,
    Previous,
}

/// The in-memory record of which playlist, track and play mode are active.
///
/// `current_index` is only meaningful while it is within the bounds of
/// `current_playlist`; an empty playlist means no song is active.
pub(crate) struct PlaybackSession {
    current_playlist: Vec<Song>,
    current_index: usize,
    play_mode: PlayMode,
    is_playing: bool,
    rng: StdRng,
}

impl PlaybackSession {
    pub(crate) fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rng()))
    }

    pub(crate) fn with_rng(rng: StdRng) -> Self {
        Self {
            current_playlist: Vec::new(),
            current_index: 0,
            play_mode: PlayMode::default(),
            is_playing: false,
            rng,
        }
    }

    pub(crate) fn current_playlist(&self) -> &[Song] {
        &self.current_playlist
    }

    pub(crate) fn current_index(&self) -> Option<usize> {
        (self.current_index < self.current_playlist.len()).then_some(self.current_index)
    }

    pub(crate) fn current(&self) -> Option<&Song> {
        self.current_playlist.get(self.current_index)
    }

    pub(crate) fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Replaces the operative playlist. The current index is left as-is and
    /// only becomes meaningful again after [`PlaybackSession::select`].
    pub(crate) fn set_playlist(&mut self, songs: Vec<Song>) {
        self.current_playlist = songs;
    }

    /// Makes the song at `index` current, returning it.
    ///
    /// Out of range requests are ignored and leave the session untouched.
    pub(crate) fn select(&mut self, index: usize) -> Option<&Song> {
        if index >= self.current_playlist.len() {
            return None;
        }

        self.current_index = index;
        self.current_playlist.get(index)
    }

    /// Computes the index that a track change in `direction` lands on.
    ///
    /// Sequential modes wrap around in both directions. Random modes draw
    /// uniformly from the playlist excluding the current song, unless it is
    /// the only song. An empty playlist has no next index.
    pub(crate) fn next_index(&mut self, direction: Direction) -> Option<usize> {
        let len = self.current_playlist.len();
        if len == 0 {
            return None;
        }

        let current = self.current_index.min(len - 1);

        if self.play_mode.is_random() {
            if len == 1 {
                return Some(current);
            }

            return (0..len).filter(|&i| i != current).choose(&mut self.rng);
        }

        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        };

        Some(next)
    }

    /// Changes the play mode.
    ///
    /// Switching to [`PlayMode::RandomAll`] widens the operative playlist to
    /// `all_songs`, relocating the current song inside it by file identity.
    /// Playback itself is not interrupted.
    pub(crate) fn set_play_mode(&mut self, mode: PlayMode, all_songs: &[Song]) {
        self.play_mode = mode;

        if mode == PlayMode::RandomAll {
            self.switch_to_all_songs(all_songs);
        }
    }

    fn switch_to_all_songs(&mut self, all_songs: &[Song]) {
        let current_file = self.current().map(|song| song.file.clone());

        self.current_playlist = all_songs.to_vec();

        if let Some(file) = current_file {
            if let Some(index) = self.current_playlist.iter().position(|s| s.file == file) {
                self.current_index = index;
            }
        }

        if self.current_index >= self.current_playlist.len() {
            self.current_index = 0;
        }
    }
}
