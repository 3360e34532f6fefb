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

//! Lyric sync engine.
//!
//! Maps the playback position onto the active lyric line and keeps that line
//! centred in the viewport, unless the user has taken over scrolling.

use crate::{
    lyrics::{LyricLine, LyricStatus},
    session::Renderer,
};

/// Index of the last line that has started at `time` seconds, if any.
///
/// `lines` must be sorted by time, which the parser guarantees. A NaN time
/// matches no line.
pub(crate) fn compute_active_index(time: f64, lines: &[LyricLine]) -> Option<usize> {
    lines.partition_point(|line| line.time() <= time).checked_sub(1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ScrollState {
    pub(crate) manual_override: bool,
    pub(crate) offset: f64,
}

/// Lyrics and scroll state of the current song.
///
/// A fresh context is created on every track change and dropped on the next.
#[derive(Debug)]
pub(crate) struct LyricSyncContext {
    status: LyricStatus,
    scroll: ScrollState,
    active: Option<usize>,
}

impl LyricSyncContext {
    pub(crate) fn new() -> Self {
        Self {
            status: LyricStatus::Loading,
            scroll: ScrollState::default(),
            active: None,
        }
    }

    pub(crate) fn status(&self) -> &LyricStatus {
        &self.status
    }

    pub(crate) fn lines(&self) -> &[LyricLine] {
        self.status.lines()
    }

    pub(crate) fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub(crate) fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    pub(crate) fn set_status(&mut self, status: LyricStatus) {
        self.status = status;
        self.active = None;
    }

    /// Highlights the line active at `time` and centres it.
    ///
    /// An unforced sync does nothing while the user scrolls manually. A forced
    /// sync releases the manual override first. When no line is active yet
    /// the highlight is cleared and the scroll position left alone.
    pub(crate) fn sync_to_active<R: Renderer + ?Sized>(&mut self, time: f64, force: bool, renderer: &mut R) {
        if force {
            self.scroll.manual_override = false;
            renderer.show_resync_affordance(false);
        } else if self.scroll.manual_override {
            return;
        }

        self.active = compute_active_index(time, self.status.lines());
        renderer.show_active_line(self.active);

        let Some(index) = self.active else {
            return;
        };

        if let Some(geometry) = renderer.line_geometry(index) {
            let centre = renderer.viewport_height() / 2.0;
            let target = centre - geometry.top - geometry.height / 2.0;

            self.scroll.offset = target;
            renderer.set_scroll_offset(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::renderer::testing::RecordingRenderer;

    fn abc() -> Vec<LyricLine> {
        vec![
            LyricLine::new(0, "a"),
            LyricLine::new(5000, "b"),
            LyricLine::new(10_000, "c"),
        ]
    }

    fn ready_context() -> LyricSyncContext {
        let mut context = LyricSyncContext::new();
        context.set_status(LyricStatus::from_lines(abc()));
        context
    }

    #[test]
    fn active_index_is_last_started_line() {
        let lines = abc();

        assert_eq!(compute_active_index(7.0, &lines), Some(1));
        assert_eq!(compute_active_index(-1.0, &lines), None);
        assert_eq!(compute_active_index(10.0, &lines), Some(2));
        assert_eq!(compute_active_index(0.0, &lines), Some(0));
        assert_eq!(compute_active_index(1e9, &lines), Some(2));
    }

    #[test]
    fn active_index_handles_degenerate_input() {
        assert_eq!(compute_active_index(3.0, &[]), None);
        assert_eq!(compute_active_index(f64::NAN, &abc()), None);
    }

    #[test]
    fn active_index_matches_linear_scan() {
        let lines = abc();
        for tenth in -20..150 {
            let time = tenth as f64 / 10.0;
            let linear = lines.iter().rposition(|l| l.time() <= time);
            assert_eq!(compute_active_index(time, &lines), linear, "{time}");
        }
    }

    #[test]
    fn sync_centres_active_line() {
        let mut context = ready_context();
        let mut renderer = RecordingRenderer::new(20.0, 2.0).with_lines(3);

        context.sync_to_active(6.0, false, &mut renderer);

        assert_eq!(context.active(), Some(1));
        assert_eq!(renderer.active, Some(1));
        // centre 10 - top 2 - half height 1
        assert_eq!(context.scroll().offset, 7.0);
        assert_eq!(renderer.offset, 7.0);
    }

    #[test]
    fn sync_before_first_line_clears_highlight_and_keeps_offset() {
        let mut context = ready_context();
        let mut renderer = RecordingRenderer::new(20.0, 2.0).with_lines(3);
        context.sync_to_active(6.0, false, &mut renderer);

        context.sync_to_active(-0.5, false, &mut renderer);

        assert_eq!(context.active(), None);
        assert_eq!(renderer.active, None);
        assert_eq!(context.scroll().offset, 7.0);
    }

    #[test]
    fn manual_override_suppresses_unforced_sync() {
        let mut context = ready_context();
        let mut renderer = RecordingRenderer::new(20.0, 2.0).with_lines(3);
        context.scroll_mut().manual_override = true;
        context.scroll_mut().offset = -30.0;

        context.sync_to_active(11.0, false, &mut renderer);

        assert_eq!(context.scroll().offset, -30.0);
        assert_eq!(context.active(), None);
        assert!(context.scroll().manual_override);
    }

    #[test]
    fn forced_sync_releases_override() {
        let mut context = ready_context();
        let mut renderer = RecordingRenderer::new(20.0, 2.0).with_lines(3);
        renderer.affordance = true;
        context.scroll_mut().manual_override = true;
        context.scroll_mut().offset = -30.0;

        context.sync_to_active(11.0, true, &mut renderer);

        assert!(!context.scroll().manual_override);
        assert!(!renderer.affordance);
        assert_eq!(context.active(), Some(2));
        assert_eq!(context.scroll().offset, 5.0);
    }

    #[test]
    fn missing_geometry_keeps_offset() {
        let mut context = ready_context();
        let mut renderer = RecordingRenderer::new(20.0, 2.0);
        context.scroll_mut().offset = 4.0;

        context.sync_to_active(6.0, false, &mut renderer);

        assert_eq!(renderer.active, Some(1));
        assert_eq!(context.scroll().offset, 4.0);
    }
}
