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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file yields the defaults.

use serde::{Deserialize, Serialize};

use crate::lyrics::scroll::DEFAULT_DAMPING;

const CONFIG_NAME: &str = "lyrebird";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// The JSON playlist catalog read at startup and written by a scan.
    pub catalog_file: String,
    /// Directory scanned for playlists, one sub-directory per playlist.
    pub music_dir: String,
    pub database_file: String,
    /// Extension of the lyric file stored next to each audio file.
    pub lyric_extension: String,
    /// Multiplier applied to wheel and drag deltas over the lyrics.
    pub scroll_damping: f64,
    /// Rows scrolled per mouse wheel notch, before damping.
    pub wheel_step: f64,
    pub tick_millis: u64,
    pub save_interval_secs: u64,
    pub seek_step_secs: f64,
    pub long_seek_step_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_file: "data.json".into(),
            music_dir: "music".into(),
            database_file: "lyrebird.db".into(),
            lyric_extension: "lrc".into(),
            scroll_damping: DEFAULT_DAMPING,
            wheel_step: 3.0,
            tick_millis: 250,
            save_interval_secs: 5,
            seek_step_secs: 5.0,
            long_seek_step_secs: 20.0,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load configuration, using defaults");
        AppConfig::default()
    })
}
