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

//! Data access layer.
//!
//! This module handles the interactions with the SQLite database used to
//! persist the playback session between runs.
//!
//! # Tables
//!
//! * `session_state` - A single row holding the playlist, song index and
//!   position that was playing when the session was last saved.

mod model;

pub(crate) use model::SessionRecord;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

/// Opens a connection to the SQLite database and configures it.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging, the session is written every
///   few seconds while playing.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
/// * **Schema**: Executes [`create_schema`] to ensure all tables exist.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The initial PRAGMA configurations fail.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open database {path}"))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!("Failed to switch to WAL mode. Current mode: {}", journal_mode);
    }

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// The `session_state` table is constrained to a single row (`id = 1`), a
/// save replaces the previous record.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS session_state (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            playlist_id TEXT NOT NULL,
            song_index INTEGER NOT NULL,
            position REAL NOT NULL,
            saved_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Stores `record` as the current session, replacing any previous one.
pub(crate) fn save_session(conn: &Connection, record: &SessionRecord) -> Result<()> {
    let sql = "
        INSERT INTO session_state (id, playlist_id, song_index, position, saved_at)
        VALUES (1, ?1, ?2, ?3, strftime('%s', 'now'))
        ON CONFLICT (id)
        DO UPDATE SET
            playlist_id = excluded.playlist_id,
            song_index = excluded.song_index,
            position = excluded.position,
            saved_at = excluded.saved_at";

    let index = i64::try_from(record.index).context("Song index out of range")?;

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![record.playlist_id, index, record.time])?;

    Ok(())
}

/// Fetches the saved session, if there is one.
pub(crate) fn load_session(conn: &Connection) -> Result<Option<SessionRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT playlist_id, song_index, position FROM session_state WHERE id = 1",
    )?;

    let record = stmt.query_row([], SessionRecord::from_row).optional()?;

    Ok(record)
}
