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

//! Scroll-lock arbiter.
//!
//! Wheel and drag input over the lyrics both reduce to a scroll delta that
//! goes through one handler. Any applied delta puts the lyrics in manual mode
//! until the user asks for a resync or the track changes; the arbiter never
//! leaves manual mode on its own.

use crate::{lyrics::sync::LyricSyncContext, session::Renderer};

pub(crate) const DEFAULT_DAMPING: f64 = 0.6;

/// Raw pointer input over the lyrics view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScrollGesture {
    /// Wheel movement, positive towards the end of the lyrics.
    Wheel(f64),
    /// Pointer pressed at vertical position `y`.
    Press(f64),
    /// Pointer dragged to vertical position `y`.
    Drag(f64),
    /// Pointer released.
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureOutcome {
    Ignored,
    Scrolled,
    /// A press and release without any movement in between.
    Click,
}

pub(crate) struct ScrollArbiter {
    damping: f64,
    last_drag: Option<f64>,
    dragged: bool,
}

impl ScrollArbiter {
    pub(crate) fn new(damping: f64) -> Self {
        Self {
            damping,
            last_drag: None,
            dragged: false,
        }
    }

    /// Feeds one gesture through the arbiter.
    pub(crate) fn handle<R: Renderer + ?Sized>(
        &mut self,
        gesture: ScrollGesture,
        lyrics: &mut LyricSyncContext,
        renderer: &mut R,
    ) -> GestureOutcome {
        match gesture {
            ScrollGesture::Wheel(delta) => self.apply_delta(delta, lyrics, renderer),
            ScrollGesture::Press(y) => {
                self.last_drag = Some(y);
                self.dragged = false;
                GestureOutcome::Ignored
            }
            ScrollGesture::Drag(y) => {
                let Some(previous) = self.last_drag.replace(y) else {
                    return GestureOutcome::Ignored;
                };

                let outcome = self.apply_delta(previous - y, lyrics, renderer);
                if outcome == GestureOutcome::Scrolled {
                    self.dragged = true;
                }
                outcome
            }
            ScrollGesture::Release => {
                let pressed = self.last_drag.take().is_some();
                if pressed && !std::mem::take(&mut self.dragged) {
                    GestureOutcome::Click
                } else {
                    GestureOutcome::Ignored
                }
            }
        }
    }

    fn apply_delta<R: Renderer + ?Sized>(
        &self,
        delta: f64,
        lyrics: &mut LyricSyncContext,
        renderer: &mut R,
    ) -> GestureOutcome {
        if delta == 0.0 || lyrics.lines().is_empty() {
            return GestureOutcome::Ignored;
        }

        let scroll = lyrics.scroll_mut();
        scroll.manual_override = true;
        scroll.offset -= delta * self.damping;

        renderer.show_resync_affordance(true);
        renderer.set_scroll_offset(scroll.offset);

        GestureOutcome::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lyrics::{LyricLine, LyricStatus},
        session::renderer::testing::RecordingRenderer,
    };

    fn context_with_lyrics() -> LyricSyncContext {
        let mut context = LyricSyncContext::new();
        context.set_status(LyricStatus::from_lines(vec![
            LyricLine::new(0, "a"),
            LyricLine::new(4000, "b"),
        ]));
        context
    }

    #[test]
    fn wheel_enters_manual_mode_with_damping() {
        let mut arbiter = ScrollArbiter::new(DEFAULT_DAMPING);
        let mut context = context_with_lyrics();
        let mut renderer = RecordingRenderer::new(10.0, 1.0);

        let outcome = arbiter.handle(ScrollGesture::Wheel(10.0), &mut context, &mut renderer);

        assert_eq!(outcome, GestureOutcome::Scrolled);
        assert!(context.scroll().manual_override);
        assert_eq!(context.scroll().offset, -6.0);
        assert_eq!(renderer.offset, -6.0);
        assert!(renderer.affordance);
    }

    #[test]
    fn drag_uses_delta_between_samples() {
        let mut arbiter = ScrollArbiter::new(0.5);
        let mut context = context_with_lyrics();
        let mut renderer = RecordingRenderer::new(10.0, 1.0);

        arbiter.handle(ScrollGesture::Press(10.0), &mut context, &mut renderer);
        arbiter.handle(ScrollGesture::Drag(6.0), &mut context, &mut renderer);
        assert_eq!(context.scroll().offset, -2.0);

        arbiter.handle(ScrollGesture::Drag(8.0), &mut context, &mut renderer);
        assert_eq!(context.scroll().offset, -1.0);

        let outcome = arbiter.handle(ScrollGesture::Release, &mut context, &mut renderer);
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    #[test]
    fn press_release_without_movement_is_a_click() {
        let mut arbiter = ScrollArbiter::new(DEFAULT_DAMPING);
        let mut context = context_with_lyrics();
        let mut renderer = RecordingRenderer::new(10.0, 1.0);

        arbiter.handle(ScrollGesture::Press(3.0), &mut context, &mut renderer);
        arbiter.handle(ScrollGesture::Drag(3.0), &mut context, &mut renderer);
        let outcome = arbiter.handle(ScrollGesture::Release, &mut context, &mut renderer);

        assert_eq!(outcome, GestureOutcome::Click);
        assert!(!context.scroll().manual_override);
    }

    #[test]
    fn gestures_without_lyrics_are_ignored() {
        let mut arbiter = ScrollArbiter::new(DEFAULT_DAMPING);
        let mut context = LyricSyncContext::new();
        let mut renderer = RecordingRenderer::new(10.0, 1.0);

        let outcome = arbiter.handle(ScrollGesture::Wheel(3.0), &mut context, &mut renderer);

        assert_eq!(outcome, GestureOutcome::Ignored);
        assert_eq!(context.scroll(), Default::default());
        assert!(!renderer.affordance);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut arbiter = ScrollArbiter::new(DEFAULT_DAMPING);
        let mut context = context_with_lyrics();
        let mut renderer = RecordingRenderer::new(10.0, 1.0);

        let outcome = arbiter.handle(ScrollGesture::Drag(4.0), &mut context, &mut renderer);

        assert_eq!(outcome, GestureOutcome::Ignored);
        assert!(!context.scroll().manual_override);
    }
}
