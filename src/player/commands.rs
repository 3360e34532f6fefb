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

//! MPV-backed audio playback engine and event processing.
//!
//! This module provides the core audio playback logic, leveraging `libmpv` for
//! audio decoding and playback control. It manages a background worker thread
//! that bridges the gap between the application's command-based interface and
//! the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`AudioPlayerCommand`]s from the session
//!    controller (load, play, pause, seek, rewind).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the application of
//!    state changes, such as time advancing, duration and the end of a track.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    events::AppEvent,
    player::{AudioPlayer, PlayerState},
};

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    Load { file: String, start_at: f64 },
    Play,
    Pause,
    SeekTo(f64),
    Rewind,
}

/// A single call into MPV.
#[derive(Debug, Clone, PartialEq)]
enum MpvAction {
    SetPause(bool),
    LoadFile(String),
    Seek(f64),
}

/// Worker-side state that outlives individual MPV events.
#[derive(Default)]
struct WorkerState {
    is_paused: bool,
    is_idle: bool,
    /// Set from `loadfile` until MPV reports the file as loaded. MPV rejects
    /// seeks in between, and `time-pos` still belongs to the previous file.
    loading: bool,
    player_state: Option<PlayerState>,
    /// File last handed to MPV, reloaded when playback is resumed after MPV
    /// went idle at the end of the file.
    last_file: Option<String>,
    /// Position to seek to as soon as the loaded file is ready.
    pending_seek: Option<f64>,
}

impl WorkerState {
    /// Translates a command into the MPV calls it needs right now, deferring
    /// seeks until a file is ready.
    fn plan(&mut self, command: AudioPlayerCommand) -> Vec<MpvAction> {
        match command {
            AudioPlayerCommand::Load { file, start_at } => {
                self.loading = true;
                self.pending_seek = (start_at > 0.0).then_some(start_at);
                self.last_file = Some(file.clone());
                vec![MpvAction::SetPause(true), MpvAction::LoadFile(file)]
            }
            AudioPlayerCommand::Play => {
                let mut actions = self.reload_if_idle();
                actions.push(MpvAction::SetPause(false));
                actions
            }
            AudioPlayerCommand::Pause => vec![MpvAction::SetPause(true)],
            AudioPlayerCommand::SeekTo(seconds) => {
                if self.loading || self.is_idle {
                    self.pending_seek = Some(seconds);
                    vec![]
                } else {
                    vec![MpvAction::Seek(seconds)]
                }
            }
            AudioPlayerCommand::Rewind => {
                let mut actions = if self.loading {
                    self.pending_seek = None;
                    vec![]
                } else if self.is_idle {
                    self.pending_seek = None;
                    self.reload_if_idle()
                } else {
                    vec![MpvAction::Seek(0.0)]
                };
                actions.push(MpvAction::SetPause(false));
                actions
            }
        }
    }

    fn reload_if_idle(&mut self) -> Vec<MpvAction> {
        if !self.is_idle || self.loading {
            return vec![];
        }

        match &self.last_file {
            Some(file) => {
                self.loading = true;
                vec![MpvAction::LoadFile(file.clone())]
            }
            None => vec![],
        }
    }

    /// The file is ready; returns the deferred seek, if any.
    fn on_file_loaded(&mut self) -> Option<MpvAction> {
        self.loading = false;
        self.is_idle = false;
        self.pending_seek.take().map(MpvAction::Seek)
    }

    fn on_end_of_file(&mut self) {
        self.is_idle = true;
    }

    fn accepts_time_pos(&self) -> bool {
        !self.loading
    }
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            tracing::error!(error = ?e, "MPV worker failed");
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining incoming commands and waiting briefly for MPV events.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the event
/// channel is closed.
fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    tracing::info!("MPV audio worker started");

    let mut state = WorkerState {
        is_idle: true,
        ..WorkerState::default()
    };

    loop {
        if !process_commands(&mut handler, &command_rx, &mut state, &event_tx) {
            tracing::info!("Player command channel closed, stopping MPV worker");
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// A failed MPV call is reported and does not stop the worker. Returns
/// `false` once the command channel has been closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<AudioPlayerCommand>,
    state: &mut WorkerState,
    event_tx: &Sender<AppEvent>,
) -> bool {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(std::sync::mpsc::TryRecvError::Empty) => return true,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => return false,
        };

        tracing::trace!(?command, "Player command");

        for action in state.plan(command) {
            run_action(handler, &action, state, event_tx);
        }
    }
}

fn run_action(handler: &mut mpv::MpvHandler, action: &MpvAction, state: &mut WorkerState, event_tx: &Sender<AppEvent>) {
    let result = match action {
        MpvAction::SetPause(pause) => handler.set_property("pause", *pause).context("Failed to set pause"),
        MpvAction::LoadFile(file) => handler
            .command(&["loadfile", file, "replace"])
            .context(format!("Failed to load file: {}", file)),
        MpvAction::Seek(seconds) => handler
            .command(&["seek", &seconds.to_string(), "absolute"])
            .context(format!("Failed to seek to {}", seconds)),
    };

    let Err(e) = result else {
        return;
    };

    tracing::warn!(error = ?e, ?action, "MPV command failed");

    if let MpvAction::LoadFile(_) = action {
        state.loading = false;
        state.pending_seek = None;
        let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
    }
}

/// Polls for MPV events and synchronizes the application state.
///
/// This function waits for up to 50ms for an event from the MPV context.
/// If an event occurs, it updates internal flags and broadcasts any necessary
/// [`AppEvent`]s to the application.
fn process_mpv_events(handler: &mut mpv::MpvHandler, state: &mut WorkerState, event_tx: &Sender<AppEvent>) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(0.05) else {
        return Ok(());
    };

    let app_event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) => Some(AppEvent::DurationChanged(duration)),
            ("pause", Format::Flag(pause)) => {
                state.is_paused = pause;
                None
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 && state.accepts_time_pos() => {
                Some(AppEvent::TimeChanged(seconds))
            }
            ("idle-active", Format::Flag(idle_active)) => {
                state.is_idle = idle_active;
                None
            }
            _ => None,
        },
        mpv::Event::FileLoaded => {
            if let Some(action) = state.on_file_loaded() {
                run_action(handler, &action, state, event_tx);
            }
            None
        }
        mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
            state.on_end_of_file();
            Some(AppEvent::TrackFinished)
        }
        _ => None,
    };

    let new_player_state = AudioPlayer::player_state(state.is_paused, state.is_idle);

    if state.player_state != Some(new_player_state) {
        state.player_state = Some(new_player_state);
        event_tx
            .send(AppEvent::PlayerStateChanged(new_player_state))
            .context("Failed to send player state event")?;
    }

    if let Some(event) = app_event {
        event_tx.send(event).context("Failed to send event")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(file: &str, start_at: f64) -> AudioPlayerCommand {
        AudioPlayerCommand::Load {
            file: file.to_string(),
            start_at,
        }
    }

    /// A worker that has `file` loaded and playing.
    fn playing(file: &str) -> WorkerState {
        let mut state = WorkerState {
            is_idle: true,
            ..WorkerState::default()
        };
        state.plan(load(file, 0.0));
        state.on_file_loaded();
        state.plan(AudioPlayerCommand::Play);
        state
    }

    #[test]
    fn seek_during_load_waits_for_file() {
        let mut state = playing("a.mp3");

        assert_eq!(
            state.plan(load("b.mp3", 0.0)),
            vec![MpvAction::SetPause(true), MpvAction::LoadFile("b.mp3".into())]
        );
        assert!(state.plan(AudioPlayerCommand::SeekTo(5.0)).is_empty());

        assert_eq!(state.on_file_loaded(), Some(MpvAction::Seek(5.0)));
        assert_eq!(state.plan(AudioPlayerCommand::SeekTo(7.0)), vec![MpvAction::Seek(7.0)]);
    }

    #[test]
    fn play_right_after_load_does_not_reload() {
        let mut state = playing("a.mp3");
        state.on_end_of_file();

        state.plan(load("b.mp3", 0.0));

        assert_eq!(state.plan(AudioPlayerCommand::Play), vec![MpvAction::SetPause(false)]);
    }

    #[test]
    fn rewind_after_end_of_file_reloads_once() {
        let mut state = playing("a.mp3");
        state.on_end_of_file();

        assert_eq!(
            state.plan(AudioPlayerCommand::Rewind),
            vec![MpvAction::LoadFile("a.mp3".into()), MpvAction::SetPause(false)]
        );
        assert_eq!(state.plan(AudioPlayerCommand::Rewind), vec![MpvAction::SetPause(false)]);
        assert!(state.plan(AudioPlayerCommand::SeekTo(3.0)).is_empty());
        assert_eq!(state.on_file_loaded(), Some(MpvAction::Seek(3.0)));
    }

    #[test]
    fn rewind_while_playing_seeks_to_start() {
        let mut state = playing("a.mp3");

        assert_eq!(
            state.plan(AudioPlayerCommand::Rewind),
            vec![MpvAction::Seek(0.0), MpvAction::SetPause(false)]
        );
    }

    #[test]
    fn load_applies_start_position_unless_rewound() {
        let mut state = WorkerState::default();
        state.plan(load("a.mp3", 42.0));
        assert_eq!(state.on_file_loaded(), Some(MpvAction::Seek(42.0)));

        state.plan(load("b.mp3", 42.0));
        state.plan(AudioPlayerCommand::Rewind);
        assert_eq!(state.on_file_loaded(), None);
    }

    #[test]
    fn time_positions_are_dropped_while_loading() {
        let mut state = playing("a.mp3");
        assert!(state.accepts_time_pos());

        state.plan(load("b.mp3", 0.0));
        assert!(!state.accepts_time_pos());

        state.on_file_loaded();
        assert!(state.accepts_time_pos());
    }
}
