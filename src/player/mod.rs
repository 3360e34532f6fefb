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

//! Audio playback control and state management.
//!
//! This module defines the [`MediaPlayback`] capability consumed by the
//! session controller and provides [`AudioPlayer`], its implementation over
//! libmpv. The player manages a background worker thread that interfaces with
//! MPV, ensuring that audio operations do not block the main application
//! thread.
//!
//! Commands flow to the worker through a channel; time, duration, play state
//! and end-of-file notifications flow back as application events.

mod commands;

use std::sync::mpsc;

use thiserror::Error;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand};

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

#[derive(Debug, Error)]
pub(crate) enum PlaybackError {
    /// The backend refused to start playback on its own.
    #[error("Playback was rejected: {0}")]
    Rejected(String),

    #[error("Audio worker is not running")]
    Disconnected,
}

impl<T> From<mpsc::SendError<T>> for PlaybackError {
    fn from(_: mpsc::SendError<T>) -> Self {
        PlaybackError::Disconnected
    }
}

/// Play/pause/seek primitives of a media backend.
pub(crate) trait MediaPlayback {
    /// Loads `uri` paused, positioned at `start_at` seconds.
    fn load(&mut self, uri: &str, start_at: f64) -> Result<(), PlaybackError>;

    /// Starts or resumes playback. Backends may reject this.
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self) -> Result<(), PlaybackError>;

    fn seek_to(&mut self, seconds: f64) -> Result<(), PlaybackError>;

    /// Returns to the start of the current resource and resumes playback,
    /// also after the resource has played to its end.
    fn rewind(&mut self) -> Result<(), PlaybackError>;
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Self { command_tx }
    }

    // Maps internal audio backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }
}

impl MediaPlayback for AudioPlayer {
    fn load(&mut self, uri: &str, start_at: f64) -> Result<(), PlaybackError> {
        self.command_tx.send(AudioPlayerCommand::Load {
            file: uri.to_string(),
            start_at,
        })?;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.command_tx.send(AudioPlayerCommand::Play)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.command_tx.send(AudioPlayerCommand::Pause)?;
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), PlaybackError> {
        self.command_tx.send(AudioPlayerCommand::SeekTo(seconds))?;
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), PlaybackError> {
        self.command_tx.send(AudioPlayerCommand::Rewind)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every call; `play` can be told to reject.
    #[derive(Debug, Default)]
    pub(crate) struct FakeMedia {
        pub(crate) calls: Vec<String>,
        pub(crate) reject_play: bool,
    }

    impl MediaPlayback for FakeMedia {
        fn load(&mut self, uri: &str, start_at: f64) -> Result<(), PlaybackError> {
            self.calls.push(format!("load {uri} {start_at}"));
            Ok(())
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            self.calls.push("play".into());
            if self.reject_play {
                return Err(PlaybackError::Rejected("autoplay not allowed".into()));
            }
            Ok(())
        }

        fn pause(&mut self) -> Result<(), PlaybackError> {
            self.calls.push("pause".into());
            Ok(())
        }

        fn seek_to(&mut self, seconds: f64) -> Result<(), PlaybackError> {
            self.calls.push(format!("seek {seconds}"));
            Ok(())
        }

        fn rewind(&mut self) -> Result<(), PlaybackError> {
            self.calls.push("rewind".into());
            Ok(())
        }
    }
}
