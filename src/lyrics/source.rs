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

//! Lyric resources.
//!
//! The lyrics of a song live next to its audio file under the same stem with
//! a lyric extension (`song.mp3` -> `song.lrc`). Reads happen off the main
//! thread, so every request carries a [`LyricToken`] identifying the track it
//! was made for; completions for a track that is no longer current are
//! discarded by the session controller.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    lyrics::{LyricLine, parser::parse_lyrics},
    model::SongId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LyricToken {
    pub(crate) generation: u64,
    pub(crate) song: SongId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LyricRequest {
    pub(crate) token: LyricToken,
    pub(crate) path: PathBuf,
}

/// Something that can fetch lyrics in the background and report back with
/// the request token.
pub(crate) trait LyricRequester {
    /// Returns `false` if the request could not be queued, in which case no
    /// completion will ever arrive for it.
    fn request_lyrics(&self, request: LyricRequest) -> bool;
}

/// Derives the lyric file path for an audio file by swapping its extension.
pub(crate) fn lyric_path_for(audio_file: &str, lyric_extension: &str) -> PathBuf {
    Path::new(audio_file).with_extension(lyric_extension)
}

/// Reads and parses the lyric file at `path`.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read as UTF-8
/// text. A readable file without any timed lines is not an error, it yields
/// an empty list.
pub(crate) fn load_lyrics(path: &Path) -> Result<Vec<LyricLine>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lyrics {}", path.display()))?;

    Ok(parse_lyrics(&text))
}
