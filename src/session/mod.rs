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

//! Playback session controller.
//!
//! The controller is the single owner of the playback session and of the lyric
//! state of the current track. It drives three capabilities:
//!
//! * [`MediaPlayback`] to load, play, pause and seek audio.
//! * [`Renderer`] to present the song, its lyrics and the scroll position.
//! * [`LyricRequester`] to fetch lyrics in the background.
//!
//! All mutation happens on the thread processing application events, one
//! event at a time.

pub(crate) mod renderer;

pub(crate) use renderer::{LineGeometry, Renderer};

use crate::{
    catalog::Catalog,
    db::SessionRecord,
    lyrics::{
        LyricLine, LyricStatus,
        scroll::{GestureOutcome, ScrollArbiter, ScrollGesture},
        source::{LyricRequest, LyricRequester, LyricToken, lyric_path_for},
        sync::LyricSyncContext,
    },
    model::{
        Song,
        session::{Direction, PlayMode, PlaybackSession},
    },
    player::{MediaPlayback, PlaybackError, PlayerState},
};

/// Position and length of the current track, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PlaybackClock {
    pub(crate) position: f64,
    pub(crate) duration: f64,
}

pub(crate) struct SessionController<M, R, L> {
    session: PlaybackSession,
    lyrics: LyricSyncContext,
    arbiter: ScrollArbiter,
    clock: PlaybackClock,
    generation: u64,
    lyric_token: Option<LyricToken>,
    lyric_extension: String,
    media: M,
    renderer: R,
    requester: L,
}

impl<M, R, L> SessionController<M, R, L>
where
    M: MediaPlayback,
    R: Renderer,
    L: LyricRequester,
{
    pub(crate) fn new(
        session: PlaybackSession,
        media: M,
        renderer: R,
        requester: L,
        lyric_extension: &str,
        scroll_damping: f64,
    ) -> Self {
        Self {
            session,
            lyrics: LyricSyncContext::new(),
            arbiter: ScrollArbiter::new(scroll_damping),
            clock: PlaybackClock::default(),
            generation: 0,
            lyric_token: None,
            lyric_extension: lyric_extension.to_string(),
            media,
            renderer,
            requester,
        }
    }

    pub(crate) fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub(crate) fn lyrics(&self) -> &LyricSyncContext {
        &self.lyrics
    }

    pub(crate) fn clock(&self) -> PlaybackClock {
        self.clock
    }

    pub(crate) fn current(&self) -> Option<&Song> {
        self.session.current()
    }

    pub(crate) fn play_mode(&self) -> PlayMode {
        self.session.play_mode()
    }

    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    pub(crate) fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Plays the song at `index` of the current playlist from the start.
    ///
    /// An out of range index is ignored. A backend that refuses to start
    /// playback leaves the session paused until the user presses play.
    pub(crate) fn play_song(&mut self, index: usize) -> Result<(), PlaybackError> {
        let Some(song) = self.session.select(index).cloned() else {
            return Ok(());
        };

        tracing::info!(title = %song.title, playlist = %song.playlist_id, index, "Playing song");

        self.begin_track(&song);
        self.media.load(&song.file, 0.0)?;
        self.start_playback()
    }

    /// Replaces the current playlist with `playlist_id` and plays the song at
    /// `index` of it. Unknown playlists and indices are ignored.
    pub(crate) fn play_from_playlist(
        &mut self,
        catalog: &Catalog,
        playlist_id: &str,
        index: usize,
    ) -> Result<(), PlaybackError> {
        let Some(playlist) = catalog.playlist(playlist_id) else {
            return Ok(());
        };
        if index >= playlist.songs.len() {
            return Ok(());
        }

        self.session.set_playlist(playlist.songs.clone());
        self.play_song(index)
    }

    /// Moves to the next or previous track according to the play mode.
    ///
    /// `is_auto` marks the natural end of a track; in single mode that
    /// rewinds and replays the same track instead of changing it.
    pub(crate) fn handle_track_change(&mut self, direction: Direction, is_auto: bool) -> Result<(), PlaybackError> {
        if self.session.current().is_none() {
            return Ok(());
        }

        if is_auto && self.session.play_mode() == PlayMode::Single {
            self.media.rewind()?;
            self.session.set_playing(true);
            self.clock.position = 0.0;
            return Ok(());
        }

        match self.session.next_index(direction) {
            Some(index) => self.play_song(index),
            None => Ok(()),
        }
    }

    pub(crate) fn on_track_finished(&mut self) -> Result<(), PlaybackError> {
        self.handle_track_change(Direction::Next, true)
    }

    pub(crate) fn toggle_play(&mut self) -> Result<(), PlaybackError> {
        if self.session.current().is_none() {
            return Ok(());
        }

        if self.session.is_playing() {
            self.media.pause()?;
            self.session.set_playing(false);
            Ok(())
        } else {
            self.start_playback()
        }
    }

    pub(crate) fn set_play_mode(&mut self, mode: PlayMode, catalog: &Catalog) {
        tracing::info!(%mode, "Play mode changed");
        self.session.set_play_mode(mode, catalog.all_songs());
    }

    pub(crate) fn cycle_play_mode(&mut self, catalog: &Catalog) {
        self.set_play_mode(self.session.play_mode().cycle(), catalog);
    }

    /// Mirrors the play state reported by the media backend.
    pub(crate) fn on_player_state(&mut self, state: PlayerState) {
        self.session.set_playing(state == PlayerState::Playing);
    }

    pub(crate) fn on_time_advance(&mut self, seconds: f64) {
        self.clock.position = seconds;
        self.lyrics.sync_to_active(seconds, false, &mut self.renderer);
    }

    pub(crate) fn on_duration(&mut self, seconds: f64) {
        self.clock.duration = seconds;
    }

    /// Applies a lyric read result, unless it belongs to a track that is no
    /// longer current. `None` means the lyrics could not be read.
    pub(crate) fn on_lyrics_loaded(&mut self, token: LyricToken, lines: Option<Vec<LyricLine>>) {
        if self.lyric_token != Some(token) {
            tracing::debug!(
                song = %token.song,
                generation = token.generation,
                current = self.generation,
                "Discarding stale lyrics"
            );
            return;
        }

        let status = lines.map_or(LyricStatus::Unavailable, LyricStatus::from_lines);
        tracing::debug!(song = %token.song, lines = status.lines().len(), "Lyrics ready");

        self.renderer.show_lyrics(&status);
        self.lyrics.set_status(status);
        self.lyrics.sync_to_active(self.clock.position, true, &mut self.renderer);
    }

    pub(crate) fn handle_gesture(&mut self, gesture: ScrollGesture) -> GestureOutcome {
        self.arbiter.handle(gesture, &mut self.lyrics, &mut self.renderer)
    }

    /// Returns the lyrics to automatic scrolling, centred on the active line.
    pub(crate) fn resync(&mut self) {
        self.lyrics.sync_to_active(self.clock.position, true, &mut self.renderer);
    }

    /// Seeks to the start of lyric line `index` and resumes automatic
    /// scrolling, starting playback if it was paused.
    pub(crate) fn seek_to_line(&mut self, index: usize) -> Result<(), PlaybackError> {
        let Some(time) = self.lyrics.lines().get(index).map(LyricLine::time) else {
            return Ok(());
        };

        self.media.seek_to(time)?;
        self.clock.position = time;

        if !self.session.is_playing() {
            self.start_playback()?;
        }

        self.lyrics.sync_to_active(time, true, &mut self.renderer);
        Ok(())
    }

    /// Seeks to `seconds`, clamped to the track.
    pub(crate) fn seek_to(&mut self, seconds: f64) -> Result<(), PlaybackError> {
        if self.session.current().is_none() || seconds.is_nan() {
            return Ok(());
        }

        let mut target = seconds.max(0.0);
        if self.clock.duration > 0.0 {
            target = target.min(self.clock.duration);
        }

        self.media.seek_to(target)?;
        self.clock.position = target;
        self.lyrics.sync_to_active(target, false, &mut self.renderer);
        Ok(())
    }

    pub(crate) fn seek_relative(&mut self, delta: f64) -> Result<(), PlaybackError> {
        self.seek_to(self.clock.position + delta)
    }

    /// Seeks to `fraction` of the track, once its duration is known.
    pub(crate) fn seek_fraction(&mut self, fraction: f64) -> Result<(), PlaybackError> {
        if self.clock.duration <= 0.0 {
            return Ok(());
        }

        self.seek_to(fraction.clamp(0.0, 1.0) * self.clock.duration)
    }

    /// Loads the song a previous session ended on, paused at its saved
    /// position.
    ///
    /// Returns `false`, changing nothing, if the record no longer matches the
    /// catalog.
    pub(crate) fn restore(&mut self, record: &SessionRecord, catalog: &Catalog) -> Result<bool, PlaybackError> {
        let Some(playlist) = catalog.playlist(&record.playlist_id) else {
            return Ok(false);
        };
        if record.index >= playlist.songs.len() {
            return Ok(false);
        }

        self.session.set_playlist(playlist.songs.clone());
        let Some(song) = self.session.select(record.index).cloned() else {
            return Ok(false);
        };

        tracing::info!(title = %song.title, time = record.time, "Restoring session");

        let time = record.time.max(0.0);
        self.begin_track(&song);
        self.media.load(&song.file, time)?;
        self.session.set_playing(false);
        self.clock.position = time;

        Ok(true)
    }

    /// The record to persist for the current song, if there is one.
    pub(crate) fn snapshot(&self) -> Option<SessionRecord> {
        self.session.current().map(|song| SessionRecord {
            playlist_id: song.playlist_id.clone(),
            index: song.song_index,
            time: self.clock.position,
        })
    }

    fn start_playback(&mut self) -> Result<(), PlaybackError> {
        match self.media.play() {
            Ok(()) => {
                self.session.set_playing(true);
                Ok(())
            }
            Err(PlaybackError::Rejected(reason)) => {
                tracing::warn!(%reason, "Playback did not start");
                self.session.set_playing(false);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Drops everything belonging to the previous track and asks for the
    /// lyrics of `song`.
    fn begin_track(&mut self, song: &Song) {
        self.generation += 1;
        self.lyrics = LyricSyncContext::new();
        self.clock = PlaybackClock::default();

        self.renderer.set_scroll_offset(0.0);
        self.renderer.show_resync_affordance(false);
        self.renderer.show_active_line(None);
        self.renderer.show_song(song);
        self.renderer.show_lyrics(self.lyrics.status());

        let token = LyricToken {
            generation: self.generation,
            song: song.id(),
        };
        self.lyric_token = Some(token);

        let requested = self.requester.request_lyrics(LyricRequest {
            token,
            path: lyric_path_for(&song.file, &self.lyric_extension),
        });

        if !requested {
            self.lyric_token = None;
            self.lyrics.set_status(LyricStatus::Unavailable);
            self.renderer.show_lyrics(self.lyrics.status());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, path::PathBuf};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        lyrics::scroll::DEFAULT_DAMPING,
        model::fixtures::playlist,
        player::testing::FakeMedia,
        session::renderer::testing::RecordingRenderer,
    };

    #[derive(Default)]
    struct RecordingRequester {
        requests: RefCell<Vec<LyricRequest>>,
        offline: bool,
    }

    impl LyricRequester for RecordingRequester {
        fn request_lyrics(&self, request: LyricRequest) -> bool {
            if self.offline {
                return false;
            }
            self.requests.borrow_mut().push(request);
            true
        }
    }

    type TestController = SessionController<FakeMedia, RecordingRenderer, RecordingRequester>;

    fn catalog() -> Catalog {
        Catalog::from_playlists(vec![
            playlist("Jazz", &["j0", "j1"]),
            playlist("Rock", &["r0", "r1", "r2"]),
        ])
    }

    fn controller() -> TestController {
        SessionController::new(
            PlaybackSession::with_rng(StdRng::seed_from_u64(3)),
            FakeMedia::default(),
            RecordingRenderer::new(20.0, 2.0),
            RecordingRequester::default(),
            "lrc",
            DEFAULT_DAMPING,
        )
    }

    fn last_token(controller: &TestController) -> LyricToken {
        controller.requester.requests.borrow().last().unwrap().token
    }

    fn lyric_lines() -> Vec<LyricLine> {
        vec![
            LyricLine::new(0, "a"),
            LyricLine::new(5000, "b"),
            LyricLine::new(10_000, "c"),
        ]
    }

    fn playing_with_lyrics() -> TestController {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 1).unwrap();
        let token = last_token(&controller);
        controller.on_lyrics_loaded(token, Some(lyric_lines()));
        controller
    }

    #[test]
    fn playing_a_song_loads_requests_lyrics_and_plays() {
        let mut controller = controller();

        controller.play_from_playlist(&catalog(), "Rock", 1).unwrap();

        assert_eq!(controller.media.calls, vec!["load music/Rock/r1.mp3 0", "play"]);
        assert!(controller.session().is_playing());
        assert_eq!(controller.renderer.song_title.as_deref(), Some("r1"));
        assert_eq!(controller.renderer.lyrics, Some(LyricStatus::Loading));

        let requests = controller.requester.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, PathBuf::from("music/Rock/r1.lrc"));
        assert_eq!(requests[0].token.song, controller.current().unwrap().id());
    }

    #[test]
    fn unknown_playlist_or_index_is_ignored() {
        let mut controller = controller();

        controller.play_from_playlist(&catalog(), "Pop", 0).unwrap();
        controller.play_from_playlist(&catalog(), "Rock", 3).unwrap();
        controller.play_song(0).unwrap();

        assert!(controller.media.calls.is_empty());
        assert!(controller.current().is_none());
        assert!(controller.requester.requests.borrow().is_empty());
    }

    #[test]
    fn rejected_playback_leaves_session_paused() {
        let mut controller = controller();
        controller.media.reject_play = true;

        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();

        assert!(!controller.session().is_playing());
        assert_eq!(controller.current().unwrap().title, "r0");
    }

    #[test]
    fn toggle_play_pauses_and_resumes() {
        let mut controller = controller();
        controller.toggle_play().unwrap();
        assert!(controller.media.calls.is_empty());

        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();
        controller.toggle_play().unwrap();
        assert!(!controller.session().is_playing());

        controller.toggle_play().unwrap();
        assert!(controller.session().is_playing());
        assert_eq!(controller.media.calls[2..], ["pause", "play"]);
    }

    #[test]
    fn track_change_wraps_in_sequence_mode() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 2).unwrap();

        controller.handle_track_change(Direction::Next, false).unwrap();
        assert_eq!(controller.session().current_index(), Some(0));

        controller.handle_track_change(Direction::Previous, false).unwrap();
        assert_eq!(controller.session().current_index(), Some(2));
    }

    #[test]
    fn track_change_without_song_is_a_no_op() {
        let mut controller = controller();

        controller.handle_track_change(Direction::Next, false).unwrap();
        controller.on_track_finished().unwrap();

        assert!(controller.media.calls.is_empty());
    }

    #[test]
    fn end_of_track_in_single_mode_rewinds() {
        let mut controller = playing_with_lyrics();
        controller.set_play_mode(PlayMode::Single, &catalog());
        controller.on_time_advance(12.0);
        let requests = controller.requester.requests.borrow().len();

        controller.on_track_finished().unwrap();

        assert_eq!(controller.media.calls.last().unwrap(), "rewind");
        assert_eq!(controller.session().current_index(), Some(1));
        assert_eq!(controller.clock().position, 0.0);
        assert_eq!(controller.requester.requests.borrow().len(), requests);
        assert!(matches!(controller.lyrics().status(), LyricStatus::Ready(_)));
    }

    #[test]
    fn manual_next_in_single_mode_moves_on() {
        let mut controller = playing_with_lyrics();
        controller.set_play_mode(PlayMode::Single, &catalog());

        controller.handle_track_change(Direction::Next, false).unwrap();

        assert_eq!(controller.session().current_index(), Some(2));
    }

    #[test]
    fn end_of_track_in_random_mode_picks_another_song() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();
        controller.set_play_mode(PlayMode::RandomList, &catalog());

        for _ in 0..20 {
            let before = controller.session().current_index();
            controller.on_track_finished().unwrap();
            assert_ne!(controller.session().current_index(), before);
        }
    }

    #[test]
    fn random_all_relocates_current_song_without_interrupting() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 1).unwrap();
        let calls = controller.media.calls.len();

        controller.set_play_mode(PlayMode::RandomAll, &catalog());

        assert_eq!(controller.session().current_playlist().len(), 5);
        assert_eq!(controller.session().current_index(), Some(3));
        assert_eq!(controller.current().unwrap().title, "r1");
        assert!(controller.session().is_playing());
        assert_eq!(controller.media.calls.len(), calls);
    }

    #[test]
    fn lyrics_are_shown_and_synced_when_loaded() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();
        controller.on_time_advance(6.0);

        let token = last_token(&controller);
        controller.on_lyrics_loaded(token, Some(lyric_lines()));

        assert_eq!(controller.renderer.active, Some(1));
        assert_eq!(controller.renderer.offset, 7.0);
        assert_eq!(controller.lyrics().lines().len(), 3);
    }

    #[test]
    fn failed_or_empty_lyrics_are_unavailable() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();
        controller.on_lyrics_loaded(last_token(&controller), None);
        assert_eq!(controller.renderer.lyrics, Some(LyricStatus::Unavailable));

        controller.play_from_playlist(&catalog(), "Rock", 1).unwrap();
        controller.on_lyrics_loaded(last_token(&controller), Some(vec![]));
        assert_eq!(controller.lyrics().status(), &LyricStatus::Unavailable);
    }

    #[test]
    fn unqueued_lyric_request_is_unavailable() {
        let mut controller = controller();
        controller.requester.offline = true;

        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();

        assert_eq!(controller.renderer.lyrics, Some(LyricStatus::Unavailable));
        assert_eq!(controller.lyrics().status(), &LyricStatus::Unavailable);
        assert_eq!(controller.media.calls.last().map(String::as_str), Some("play"));
    }

    #[test]
    fn stale_lyrics_are_discarded() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();
        let stale = last_token(&controller);
        controller.play_from_playlist(&catalog(), "Rock", 1).unwrap();

        controller.on_lyrics_loaded(stale, Some(lyric_lines()));

        assert_eq!(controller.lyrics().status(), &LyricStatus::Loading);
        assert_eq!(controller.renderer.lyrics, Some(LyricStatus::Loading));
    }

    #[test]
    fn replaying_same_song_invalidates_earlier_request() {
        let mut controller = controller();
        controller.play_from_playlist(&catalog(), "Rock", 0).unwrap();
        let first = last_token(&controller);
        controller.play_song(0).unwrap();

        assert_eq!(first.song, last_token(&controller).song);
        controller.on_lyrics_loaded(first, Some(lyric_lines()));

        assert_eq!(controller.lyrics().status(), &LyricStatus::Loading);
    }

    #[test]
    fn time_ticks_follow_active_line() {
        let mut controller = playing_with_lyrics();

        controller.on_time_advance(11.0);

        assert_eq!(controller.renderer.active, Some(2));
        // centre 10 - top 4 - half height 1
        assert_eq!(controller.renderer.offset, 5.0);
    }

    #[test]
    fn manual_scroll_holds_until_resync() {
        let mut controller = playing_with_lyrics();
        controller.on_time_advance(1.0);

        let outcome = controller.handle_gesture(ScrollGesture::Wheel(5.0));
        assert_eq!(outcome, GestureOutcome::Scrolled);
        let scrolled = controller.lyrics().scroll().offset;
        assert!(controller.renderer.affordance);

        controller.on_time_advance(11.0);
        assert_eq!(controller.lyrics().scroll().offset, scrolled);
        assert!(controller.lyrics().scroll().manual_override);

        controller.resync();
        assert!(!controller.lyrics().scroll().manual_override);
        assert!(!controller.renderer.affordance);
        assert_eq!(controller.lyrics().scroll().offset, 5.0);
    }

    #[test]
    fn track_change_resets_scroll_state() {
        let mut controller = playing_with_lyrics();
        controller.handle_gesture(ScrollGesture::Wheel(5.0));

        controller.handle_track_change(Direction::Next, false).unwrap();

        assert!(!controller.lyrics().scroll().manual_override);
        assert_eq!(controller.lyrics().scroll().offset, 0.0);
        assert!(controller.lyrics().lines().is_empty());
        assert!(!controller.renderer.affordance);
        assert_eq!(controller.renderer.offset, 0.0);
        assert_eq!(controller.renderer.active, None);
    }

    #[test]
    fn seek_to_line_seeks_resumes_and_resyncs() {
        let mut controller = playing_with_lyrics();
        controller.toggle_play().unwrap();
        controller.handle_gesture(ScrollGesture::Wheel(5.0));

        controller.seek_to_line(2).unwrap();

        assert_eq!(controller.media.calls[controller.media.calls.len() - 2..], ["seek 10", "play"]);
        assert!(controller.session().is_playing());
        assert!(!controller.lyrics().scroll().manual_override);
        assert_eq!(controller.renderer.active, Some(2));
        assert_eq!(controller.clock().position, 10.0);
    }

    #[test]
    fn seek_to_missing_line_is_ignored() {
        let mut controller = playing_with_lyrics();
        let calls = controller.media.calls.len();

        controller.seek_to_line(9).unwrap();

        assert_eq!(controller.media.calls.len(), calls);
    }

    #[test]
    fn seeks_are_clamped_to_the_track() {
        let mut controller = playing_with_lyrics();
        controller.on_duration(100.0);
        controller.on_time_advance(3.0);

        controller.seek_relative(-5.0).unwrap();
        assert_eq!(controller.clock().position, 0.0);

        controller.seek_to(250.0).unwrap();
        assert_eq!(controller.clock().position, 100.0);

        controller.seek_fraction(0.25).unwrap();
        assert_eq!(controller.media.calls.last().unwrap(), "seek 25");
    }

    #[test]
    fn seek_fraction_needs_a_duration() {
        let mut controller = playing_with_lyrics();
        let calls = controller.media.calls.len();

        controller.seek_fraction(0.5).unwrap();

        assert_eq!(controller.media.calls.len(), calls);
    }

    #[test]
    fn snapshot_records_song_position() {
        let mut controller = controller();
        assert_eq!(controller.snapshot(), None);

        controller.play_from_playlist(&catalog(), "Rock", 2).unwrap();
        controller.set_play_mode(PlayMode::RandomAll, &catalog());
        controller.on_time_advance(42.5);

        assert_eq!(
            controller.snapshot(),
            Some(SessionRecord {
                playlist_id: "Rock".into(),
                index: 2,
                time: 42.5,
            })
        );
    }

    #[test]
    fn restore_loads_paused_at_saved_time() {
        let mut controller = controller();
        let record = SessionRecord {
            playlist_id: "Jazz".into(),
            index: 1,
            time: 33.0,
        };

        assert!(controller.restore(&record, &catalog()).unwrap());

        assert_eq!(controller.media.calls, vec!["load music/Jazz/j1.mp3 33"]);
        assert!(!controller.session().is_playing());
        assert_eq!(controller.clock().position, 33.0);
        assert_eq!(controller.requester.requests.borrow().len(), 1);
        assert_eq!(controller.snapshot(), Some(record));
    }

    #[test]
    fn restore_ignores_records_not_in_catalog() {
        let mut controller = controller();

        let missing = SessionRecord {
            playlist_id: "Pop".into(),
            index: 0,
            time: 1.0,
        };
        let out_of_range = SessionRecord {
            playlist_id: "Jazz".into(),
            index: 2,
            time: 1.0,
        };

        assert!(!controller.restore(&missing, &catalog()).unwrap());
        assert!(!controller.restore(&out_of_range, &catalog()).unwrap());
        assert!(controller.media.calls.is_empty());
        assert!(controller.current().is_none());
    }
}
