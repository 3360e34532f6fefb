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

//! Terminal UI components.
//!
//! Each component keeps its own state, handles the input routed to it and
//! draws itself.
//!
//! * [`PlaylistsView`]: the playlist sidebar.
//! * [`SongListView`]: the songs of a playlist, or search results.
//! * [`SongTableState`]: the table widget behind the song list.
//! * [`NowPlayingView`]: the current song and its lyrics.
//! * [`SearchBar`]: the `/` search prompt.

mod now_playing;
mod playlists;
mod search;
mod song_list;
mod song_table;

pub(crate) use now_playing::NowPlayingView;
pub(crate) use playlists::PlaylistsView;
pub(crate) use search::SearchBar;
pub(crate) use song_list::{SongListSource, SongListView};
pub(crate) use song_table::{SongTable, SongTableAction, SongTableState};
