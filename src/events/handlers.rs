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

use anyhow::Result;

use crate::{
    App,
    catalog::Catalog,
    db::SessionRecord,
    lyrics::{LyricLine, source::LyricToken},
    model::{search::filter_songs, session::PlayMode},
    player::PlayerState,
    tasks::AppTask,
};

pub(super) fn handle_navigate(app: &mut App, playlist_id: &str) {
    if !app.navigation.select(&app.catalog, playlist_id) {
        app.status = Some(format!("No playlist named {}", playlist_id));
        return;
    }

    app.search.input.reset();
    app.playlists_view.highlight(playlist_id);
    show_navigated_playlist(app);
}

/// Lists the songs of the playlist named by the navigation token.
pub(super) fn show_navigated_playlist(app: &mut App) {
    match app.navigation.token().and_then(|id| app.catalog.playlist(id)) {
        Some(playlist) => app.song_list.show_playlist(playlist),
        None => app.song_list.clear(),
    }
}

pub(super) fn handle_play_song(app: &mut App, playlist_id: &str, index: usize) -> Result<()> {
    app.session.play_from_playlist(&app.catalog, playlist_id, index)?;

    Ok(())
}

pub(super) fn handle_search_changed(app: &mut App, query: &str) {
    if query.trim().is_empty() {
        show_navigated_playlist(app);
        return;
    }

    let results = filter_songs(app.catalog.all_songs(), query);
    app.song_list.show_search(query, results);
}

pub(super) fn handle_search_closed(app: &mut App) {
    if app.song_list.is_search() {
        show_navigated_playlist(app);
    }
}

pub(super) fn handle_set_play_mode(app: &mut App, mode: PlayMode) {
    app.session.set_play_mode(mode, &app.catalog);
}

pub(super) fn handle_cycle_play_mode(app: &mut App) {
    app.session.cycle_play_mode(&app.catalog);
}

pub(super) fn handle_resync(app: &mut App) {
    app.session.resync();
}

pub(super) fn handle_scan_catalog(app: &mut App) -> Result<()> {
    app.status = Some("Scanning music directory...".to_string());
    app.task_tx.send(AppTask::ScanCatalog)?;

    Ok(())
}

pub(super) fn handle_catalog_updated(app: &mut App, catalog: Catalog) {
    app.status = Some(format!(
        "Catalog updated: {} playlists, {} songs",
        catalog.playlists().len(),
        catalog.all_songs().len()
    ));

    app.catalog = catalog;
    app.navigation.revalidate(&app.catalog);

    if app.navigation.token().is_none() {
        if let Some(first) = app.catalog.playlists().first() {
            app.navigation.select(&app.catalog, &first.id);
        }
    }

    app.playlists_view.set_catalog(&app.catalog, app.navigation.token());
    show_navigated_playlist(app);
}

pub(super) fn handle_lyrics_loaded(app: &mut App, token: LyricToken, lines: Option<Vec<LyricLine>>) {
    app.session.on_lyrics_loaded(token, lines);
}

pub(super) fn handle_session_restored(app: &mut App, record: Option<SessionRecord>) -> Result<()> {
    let Some(record) = record else {
        return Ok(());
    };

    if app.session.restore(&record, &app.catalog)? {
        handle_navigate(app, &record.playlist_id);
        app.song_list.table.select(record.index);
    } else {
        tracing::info!(playlist = %record.playlist_id, index = record.index, "Saved session no longer in catalog");
    }

    Ok(())
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
    app.session.on_player_state(state);
}

pub(super) fn handle_duration_changed(app: &mut App, duration: f64) {
    app.session.on_duration(duration);
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.session.on_time_advance(seconds);
}

pub(super) fn handle_track_finished(app: &mut App) -> Result<()> {
    app.session.on_track_finished()?;

    Ok(())
}

pub(super) fn handle_save_tick(app: &mut App) -> Result<()> {
    if let Some(record) = app.session.snapshot() {
        app.task_tx.send(AppTask::SaveSession(record))?;
    }

    Ok(())
}

pub(super) fn handle_error(app: &mut App, message: String) {
    tracing::warn!(%message, "Application error");
    app.status = Some(message);
}
