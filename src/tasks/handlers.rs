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

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    catalog::{self, Catalog, scan},
    db::{self, SessionRecord},
    events::AppEvent,
    lyrics::source::{self, LyricRequest},
    tasks::TaskContext,
};

pub(super) fn load_lyrics(ctx: &mut TaskContext, request: LyricRequest) -> Result<()> {
    let lines = match source::load_lyrics(&request.path) {
        Ok(lines) => Some(lines),
        Err(e) => {
            tracing::debug!(path = %request.path.display(), error = %e, "No lyrics");
            None
        }
    };

    ctx.event_tx.send(AppEvent::LyricsLoaded {
        token: request.token,
        lines,
    })?;

    Ok(())
}

pub(super) fn save_session(ctx: &mut TaskContext, record: &SessionRecord) -> Result<()> {
    let Some(conn) = ctx.conn.as_deref_mut() else {
        return Ok(());
    };

    if let Err(e) = db::save_session(conn, record) {
        tracing::warn!(error = ?e, "Failed to save session");
    }

    Ok(())
}

pub(super) fn restore_session(ctx: &mut TaskContext) -> Result<()> {
    let record = match ctx.conn.as_deref_mut() {
        Some(conn) => db::load_session(conn).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, "Failed to load saved session");
            None
        }),
        None => None,
    };

    ctx.event_tx.send(AppEvent::SessionRestored(record))?;

    Ok(())
}

pub(super) fn scan_catalog(ctx: &mut TaskContext) -> Result<()> {
    let catalog = rebuild_catalog(Path::new(&ctx.config.music_dir), Path::new(&ctx.config.catalog_file))?;

    ctx.event_tx.send(AppEvent::CatalogUpdated(catalog))?;

    Ok(())
}

/// Scans `music_dir`, writes the resulting document to `catalog_file` and
/// reads it back.
pub(crate) fn rebuild_catalog(music_dir: &Path, catalog_file: &Path) -> Result<Catalog> {
    tracing::info!(dir = %music_dir.display(), "Scanning music directory");

    let document = scan::scan_music_dir(music_dir)?;
    catalog::save_document(catalog_file, &document)?;

    let catalog = Catalog::load(catalog_file).context("Failed to reload scanned catalog")?;

    tracing::info!(
        playlists = catalog.playlists().len(),
        songs = catalog.all_songs().len(),
        "Catalog rebuilt"
    );

    Ok(catalog)
}
