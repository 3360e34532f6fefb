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

//! Asynchronous application task processing.
//!
//! This module offloads potentially blocking work from the main UI thread:
//! lyric file reads, session persistence and catalog scans. A dedicated worker
//! loop executes [`AppTask`] requests and broadcasts the results back to the
//! application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

mod handlers;

pub(crate) use handlers::rebuild_catalog;

use rusqlite::Connection;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    config::AppConfig,
    db::{self, SessionRecord},
    events::AppEvent,
    lyrics::source::{LyricRequest, LyricRequester},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadLyrics(LyricRequest),

    SaveSession(SessionRecord),
    RestoreSession,

    ScanCatalog,
}

/// Lyric requests are queued on the task worker; the parsed result comes back
/// as [`AppEvent::LyricsLoaded`] carrying the request token.
impl LyricRequester for Sender<AppTask> {
    fn request_lyrics(&self, request: LyricRequest) -> bool {
        let queued = self.send(AppTask::LoadLyrics(request)).is_ok();
        if !queued {
            tracing::warn!("Task worker is not running, lyrics not requested");
        }
        queued
    }
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own database connection and enters
/// a blocking loop, listening for incoming [`AppTask`]s. Without a database
/// the worker keeps running, the session is just not persisted.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(config: &AppConfig, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    let config = config.clone();

    thread::spawn(move || {
        let mut conn = match db::init_db(&config.database_file) {
            Ok(conn) => Some(conn),
            Err(e) => {
                tracing::warn!(error = ?e, "Session database unavailable");
                None
            }
        };

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                conn: conn.as_mut(),
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                tracing::error!(error = ?e, "Task failed");
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }

        tracing::debug!("Task channel closed, stopping task worker");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    conn: Option<&'a mut Connection>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> anyhow::Result<()> {
    match task {
        AppTask::LoadLyrics(request) => handlers::load_lyrics(ctx, request),

        AppTask::SaveSession(record) => handlers::save_session(ctx, &record),
        AppTask::RestoreSession => handlers::restore_session(ctx),

        AppTask::ScanCatalog => handlers::scan_catalog(ctx),
    }
}
