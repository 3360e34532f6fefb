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

//! Catalog generation from a music directory.
//!
//! This module walks a music directory and builds a [`CatalogDocument`] from
//! it. Every immediate sub-directory becomes a playlist named after the
//! directory, and every audio file inside it becomes a song.
//!
//! It utilizes `WalkDir` for directory traversal and `Lofty` for metadata and
//! embedded artwork extraction.
//!
//! # Covers
//!
//! Each song gets the first cover found, in order:
//! 1. An image next to the audio file with the same stem (`song.jpg`).
//! 2. The embedded picture, extracted once to `song_cover.jpg`.
//! 3. The playlist cover, a `cover.*` image or else any other image in the
//!    directory.
//! 4. A generated placeholder URL.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use lofty::{prelude::*, probe::Probe};
use walkdir::WalkDir;

use crate::catalog::{CatalogDocument, SongRecord};

pub(crate) const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "ogg", "wav"];
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

const EXTRACTED_COVER_SUFFIX: &str = "_cover";
const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Scans `root` and returns the resulting catalog document.
///
/// Directories without any audio files are left out of the catalog.
///
/// # Errors
///
/// Returns an error if `root` cannot be read, or if a path is not valid
/// UTF-8. Unreadable tags and artwork are not errors, the affected song falls
/// back to defaults derived from its file name.
pub(crate) fn scan_music_dir(root: &Path) -> Result<CatalogDocument> {
    if !root.is_dir() {
        anyhow::bail!("Music directory not found: {}", root.display());
    }

    let mut document = CatalogDocument::new();

    for entry in sorted_entries(root) {
        if !entry.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let songs = scan_playlist_dir(&entry, name)?;
        tracing::info!(playlist = name, songs = songs.len(), "Scanned playlist");

        if !songs.is_empty() {
            document.insert(name.to_string(), songs);
        }
    }

    Ok(document)
}

fn scan_playlist_dir(dir: &Path, name: &str) -> Result<Vec<SongRecord>> {
    let files = sorted_entries(dir);

    let playlist_cover = match find_playlist_cover(&files) {
        Some(path) => path_string(&path)?,
        None => placeholder_cover(name),
    };

    let mut songs = Vec::new();

    for path in files.iter().filter(|p| has_extension(p, &AUDIO_EXTENSIONS)) {
        let (title, artist, album) = read_metadata(path);

        let cover = match find_song_cover(path) {
            Some(cover_path) => path_string(&cover_path)?,
            None => playlist_cover.clone(),
        };

        songs.push(SongRecord {
            title,
            artist,
            album,
            file: path_string(path)?,
            cover,
        });
    }

    Ok(songs)
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .collect()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext.to_ascii_lowercase().as_str()))
}

fn path_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .context("Path contains invalid UTF-8")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn placeholder_cover(playlist_name: &str) -> String {
    let initials: String = playlist_name.chars().take(2).collect::<String>().to_uppercase();
    format!("https://via.placeholder.com/300/6750a4/ffffff?text={initials}")
}

fn find_playlist_cover(files: &[PathBuf]) -> Option<PathBuf> {
    let images = || files.iter().filter(|p| has_extension(p, &IMAGE_EXTENSIONS));

    images()
        .find(|p| file_stem(p).to_lowercase().starts_with("cover"))
        .or_else(|| images().find(|p| !file_stem(p).contains(EXTRACTED_COVER_SUFFIX)))
        .cloned()
}

fn find_song_cover(audio_path: &Path) -> Option<PathBuf> {
    let dir = audio_path.parent()?;
    let stem = file_stem(audio_path);

    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|p| p.exists())
        .or_else(|| extract_embedded_cover(audio_path))
}

/// Writes the first embedded picture of `audio_path` next to it, returning
/// the image path. A previously extracted image is reused as-is.
fn extract_embedded_cover(audio_path: &Path) -> Option<PathBuf> {
    let dir = audio_path.parent()?;
    let save_path = dir.join(format!("{}{EXTRACTED_COVER_SUFFIX}.jpg", file_stem(audio_path)));

    if save_path.exists() {
        return Some(save_path);
    }

    let tagged_file = Probe::open(audio_path).and_then(|p| p.read()).ok()?;
    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag())?;
    let picture = tag.pictures().first()?;

    match fs::write(&save_path, picture.data()) {
        Ok(()) => {
            tracing::debug!(cover = %save_path.display(), "Extracted embedded cover");
            Some(save_path)
        }
        Err(e) => {
            tracing::warn!(cover = %save_path.display(), error = %e, "Failed to write embedded cover");
            None
        }
    }
}

/// Reads title, artist and album from the file tags, falling back to the
/// file stem and an unknown artist.
fn read_metadata(path: &Path) -> (String, String, Option<String>) {
    let fallback_title = file_stem(path);

    let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(file = %path.display(), error = %e, "No readable tags");
            return (fallback_title, UNKNOWN_ARTIST.to_string(), None);
        }
    };

    let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) else {
        return (fallback_title, UNKNOWN_ARTIST.to_string(), None);
    };

    let title = tag.title().map(|t| t.to_string()).unwrap_or(fallback_title);
    let artist = tag.artist().map(|a| a.to_string()).unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
    let album = tag.album().map(|a| a.to_string());

    (title, artist, album)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"not really media").unwrap();
    }

    #[test]
    fn builds_playlists_from_directories() {
        let root = tempfile::tempdir().unwrap();
        let rock = root.path().join("Rock");
        let empty = root.path().join("Notes");
        fs::create_dir(&rock).unwrap();
        fs::create_dir(&empty).unwrap();

        touch(&rock.join("b.mp3"));
        touch(&rock.join("a.FLAC"));
        touch(&rock.join("a.jpg"));
        touch(&rock.join("cover.png"));
        touch(&rock.join("lyrics.lrc"));
        touch(&empty.join("readme.txt"));
        touch(&root.path().join("stray.mp3"));

        let document = scan_music_dir(root.path()).unwrap();

        assert_eq!(document.keys().collect::<Vec<_>>(), ["Rock"]);

        let songs = &document["Rock"];
        assert_eq!(songs.len(), 2);

        assert_eq!(songs[0].title, "a");
        assert_eq!(songs[0].artist, UNKNOWN_ARTIST);
        assert_eq!(songs[0].album, None);
        assert!(songs[0].file.ends_with("a.FLAC"));
        assert!(songs[0].cover.ends_with("a.jpg"));

        assert_eq!(songs[1].title, "b");
        assert!(songs[1].cover.ends_with("cover.png"));
    }

    #[test]
    fn playlist_without_images_gets_placeholder_cover() {
        let root = tempfile::tempdir().unwrap();
        let jazz = root.path().join("jazz");
        fs::create_dir(&jazz).unwrap();
        touch(&jazz.join("take.ogg"));

        let document = scan_music_dir(root.path()).unwrap();

        assert_eq!(
            document["jazz"][0].cover,
            "https://via.placeholder.com/300/6750a4/ffffff?text=JA"
        );
    }

    #[test]
    fn extracted_covers_are_not_playlist_covers() {
        let root = tempfile::tempdir().unwrap();
        let pop = root.path().join("Pop");
        fs::create_dir(&pop).unwrap();
        touch(&pop.join("one.mp3"));
        touch(&pop.join("two.mp3"));
        touch(&pop.join("one_cover.jpg"));
        touch(&pop.join("art.webp"));

        let document = scan_music_dir(root.path()).unwrap();

        let songs = &document["Pop"];
        assert!(songs[0].cover.ends_with("one_cover.jpg"));
        assert!(songs[1].cover.ends_with("art.webp"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(scan_music_dir(&root.path().join("missing")).is_err());
    }
}
