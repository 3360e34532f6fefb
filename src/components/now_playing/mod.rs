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

//! Now-playing pane.
//!
//! Shows the metadata of the current song above its lyrics, and is the
//! terminal implementation of [`Renderer`]. Lyric lines are word-wrapped to
//! the pane width and stacked with a blank row between them; the resulting
//! geometry is what the sync engine centres on.

mod render;

use ratatui::{layout::Rect, text::Span};

use crate::{
    lyrics::LyricStatus,
    model::Song,
    session::{LineGeometry, Renderer},
};

/// Blank rows between two lyric lines.
const LINE_GAP: u16 = 1;

#[derive(Debug)]
struct LaidOutLine {
    top: u16,
    rows: Vec<String>,
}

pub(crate) struct NowPlayingView {
    song: Option<Song>,
    status: LyricStatus,
    active: Option<usize>,
    offset: f64,
    resync_visible: bool,
    /// Area of the scrolling lyric track, as of the last draw.
    track_area: Rect,
    layout: Vec<LaidOutLine>,
}

impl NowPlayingView {
    pub(crate) fn new() -> Self {
        Self {
            song: None,
            status: LyricStatus::Loading,
            active: None,
            offset: 0.0,
            resync_visible: false,
            track_area: Rect::default(),
            layout: vec![],
        }
    }

    pub(crate) fn song(&self) -> Option<&Song> {
        self.song.as_ref()
    }

    pub(crate) fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.track_area.x
            && column < self.track_area.right()
            && row >= self.track_area.y
            && row < self.track_area.bottom()
    }

    /// The lyric line drawn at terminal row `row`, if any.
    pub(crate) fn line_at(&self, row: u16) -> Option<usize> {
        if row < self.track_area.y || row >= self.track_area.bottom() {
            return None;
        }

        let track_row = i64::from(row - self.track_area.y) - self.offset_rows();
        self.layout.iter().position(|line| {
            let top = i64::from(line.top);
            track_row >= top && track_row < top + line.rows.len() as i64
        })
    }

    /// The lyric line drawn nearest the middle of the track.
    pub(crate) fn centre_line(&self) -> Option<usize> {
        let middle = self.track_area.y + self.track_area.height / 2;
        self.line_at(middle).or_else(|| {
            let track_row = i64::from(self.track_area.height / 2) - self.offset_rows();
            self.layout
                .iter()
                .position(|line| i64::from(line.top) > track_row)
                .or_else(|| self.layout.len().checked_sub(1))
        })
    }

    fn offset_rows(&self) -> i64 {
        self.offset.round() as i64
    }

    /// Records where the track is drawn, laying the lines out again when the
    /// width changes.
    fn set_track_area(&mut self, area: Rect) {
        let relayout = area.width != self.track_area.width;
        self.track_area = area;
        if relayout {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        let width = usize::from(self.track_area.width);
        let mut top = 0u16;

        self.layout = self
            .status
            .lines()
            .iter()
            .map(|line| {
                let rows = wrap_text(&line.display_text(), width);
                let laid_out = LaidOutLine { top, rows };
                top = top
                    .saturating_add(laid_out.rows.len() as u16)
                    .saturating_add(LINE_GAP);
                laid_out
            })
            .collect();
    }
}

impl Renderer for NowPlayingView {
    fn show_song(&mut self, song: &Song) {
        self.song = Some(song.clone());
    }

    fn show_lyrics(&mut self, status: &LyricStatus) {
        self.status = status.clone();
        self.active = None;
        self.relayout();
    }

    fn show_active_line(&mut self, index: Option<usize>) {
        self.active = index;
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn show_resync_affordance(&mut self, visible: bool) {
        self.resync_visible = visible;
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.track_area.height)
    }

    fn line_geometry(&self, index: usize) -> Option<LineGeometry> {
        if self.track_area.width == 0 {
            return None;
        }

        self.layout.get(index).map(|line| LineGeometry {
            top: f64::from(line.top),
            height: line.rows.len() as f64,
        })
    }
}

/// Greedy word wrap to `width` display columns. Words wider than a row are
/// broken between characters.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = Span::raw(word).width();
        let separator = usize::from(!row.is_empty());

        if row_width + separator + word_width <= width {
            if separator == 1 {
                row.push(' ');
            }
            row.push_str(word);
            row_width += separator + word_width;
            continue;
        }

        if !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = Span::raw(ch.to_string()).width();
            if row_width + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::LyricLine;

    fn view_with(lines: Vec<LyricLine>, area: Rect) -> NowPlayingView {
        let mut view = NowPlayingView::new();
        view.set_track_area(area);
        view.show_lyrics(&LyricStatus::from_lines(lines));
        view
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn lines_stack_with_gap() {
        let view = view_with(
            vec![
                LyricLine::new(0, "short"),
                LyricLine::new(1000, "a line that wraps"),
                LyricLine::new(2000, "end"),
            ],
            Rect::new(0, 0, 10, 20),
        );

        assert_eq!(view.line_geometry(0), Some(LineGeometry { top: 0.0, height: 1.0 }));
        assert_eq!(view.line_geometry(1), Some(LineGeometry { top: 2.0, height: 2.0 }));
        assert_eq!(view.line_geometry(2), Some(LineGeometry { top: 5.0, height: 1.0 }));
        assert_eq!(view.line_geometry(3), None);
        assert_eq!(view.viewport_height(), 20.0);
    }

    #[test]
    fn no_geometry_before_first_draw() {
        let mut view = NowPlayingView::new();
        view.show_lyrics(&LyricStatus::from_lines(vec![LyricLine::new(0, "a")]));

        assert_eq!(view.line_geometry(0), None);
    }

    #[test]
    fn width_change_relayouts() {
        let mut view = view_with(vec![LyricLine::new(0, "one two three")], Rect::new(0, 0, 20, 10));
        assert_eq!(view.line_geometry(0).unwrap().height, 1.0);

        view.set_track_area(Rect::new(0, 0, 7, 10));
        assert_eq!(view.line_geometry(0).unwrap().height, 2.0);
    }

    #[test]
    fn line_at_accounts_for_offset() {
        let mut view = view_with(
            vec![LyricLine::new(0, "a"), LyricLine::new(1000, "b")],
            Rect::new(0, 5, 10, 10),
        );
        view.set_scroll_offset(4.0);

        assert_eq!(view.line_at(9), Some(0));
        assert_eq!(view.line_at(10), None);
        assert_eq!(view.line_at(11), Some(1));
        assert_eq!(view.line_at(4), None);
    }

    #[test]
    fn centre_line_prefers_line_below_a_gap() {
        let mut view = view_with(
            vec![LyricLine::new(0, "a"), LyricLine::new(1000, "b")],
            Rect::new(0, 5, 10, 10),
        );

        view.set_scroll_offset(5.0);
        assert_eq!(view.centre_line(), Some(0));

        view.set_scroll_offset(4.0);
        assert_eq!(view.centre_line(), Some(1));

        view.set_scroll_offset(-20.0);
        assert_eq!(view.centre_line(), Some(1));
    }

    #[test]
    fn contains_checks_track_area() {
        let view = view_with(vec![], Rect::new(10, 5, 10, 10));

        assert!(view.contains(10, 5));
        assert!(!view.contains(9, 5));
        assert!(!view.contains(10, 15));
    }
}
