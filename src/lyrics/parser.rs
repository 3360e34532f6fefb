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

//! LRC timed-text parser.
//!
//! Supports the common `[mm:ss]text` and `[mm:ss.xx]text` / `[mm:ss.xxx]text`
//! forms. A line may carry several timestamps, each producing an entry with
//! the same text:
//!
//! ```text
//! [00:12.00][01:30.50]Chorus line
//! [ar:Some Artist]
//! [00:12.00]Translated chorus line
//! ```
//!
//! Every bracketed group is stripped from the text, but only timestamps
//! produce entries, so metadata tags such as `[ar:..]` are dropped. Parsing
//! never fails; anything that is not a timed line with text is ignored.

use std::collections::BTreeMap;

use crate::lyrics::LyricLine;

/// Parses LRC text into lines sorted by time, one line per distinct
/// timestamp.
///
/// Repeated timestamps are merged, with later texts appended to the first
/// line as alternates in the order they appear.
pub(crate) fn parse_lyrics(src: &str) -> Vec<LyricLine> {
    let mut lines: BTreeMap<u64, LyricLine> = BTreeMap::new();

    for raw in src.lines() {
        let (timestamps, text) = split_line(raw);
        if timestamps.is_empty() || text.is_empty() {
            continue;
        }

        for time_ms in timestamps {
            lines
                .entry(time_ms)
                .and_modify(|line| line.push_alternate(text.as_str()))
                .or_insert_with(|| LyricLine::new(time_ms, text.as_str()));
        }
    }

    lines.into_values().collect()
}

/// Splits a raw line into the timestamps of its tags and its free text with
/// every bracketed group removed.
fn split_line(line: &str) -> (Vec<u64>, String) {
    let mut timestamps = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };

        text.push_str(&rest[..open]);

        if let Some(time_ms) = parse_timestamp(&rest[open + 1..close]) {
            timestamps.push(time_ms);
        }

        rest = &rest[close + 1..];
    }

    text.push_str(rest);

    (timestamps, text.trim().to_string())
}

/// Parses `mm:ss`, `mm:ss.xx` or `mm:ss.xxx` into milliseconds.
fn parse_timestamp(tag: &str) -> Option<u64> {
    let (minutes, rest) = tag.split_once(':')?;
    let (seconds, fraction) = match rest.split_once('.') {
        Some((seconds, fraction)) => (seconds, Some(fraction)),
        None => (rest, None),
    };

    if !is_digits(minutes) || seconds.len() != 2 || !is_digits(seconds) {
        return None;
    }

    let millis = match fraction {
        None => 0,
        Some(f) if is_digits(f) && f.len() == 2 => f.parse::<u64>().ok()? * 10,
        Some(f) if is_digits(f) && f.len() == 3 => f.parse::<u64>().ok()?,
        Some(_) => return None,
    };

    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;

    minutes
        .checked_mul(60_000)?
        .checked_add(seconds * 1000 + millis)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractional_timestamp() {
        let lines = parse_lyrics("[01:02.50]Hello");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].time(), 62.5);
        assert_eq!(lines[0].text(), "Hello");
    }

    #[test]
    fn accepts_whole_and_millisecond_timestamps() {
        let lines = parse_lyrics("[00:03]a\n[00:04.125]b");

        assert_eq!(lines[0].time_ms(), 3000);
        assert_eq!(lines[1].time_ms(), 4125);
    }

    #[test]
    fn merges_identical_timestamps() {
        let lines = parse_lyrics("[00:10]A\n[00:10]B");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].time(), 10.0);

        let text = lines[0].display_text();
        assert!(text.contains('A'));
        assert!(text.contains('B'));
        assert_eq!(lines[0].alternates(), ["B"]);
    }

    #[test]
    fn equal_times_in_different_notation_merge() {
        let lines = parse_lyrics("[00:10.50]first\n[00:10.500]second");

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].display_text(), "first (second)");
    }

    #[test]
    fn repeated_tags_share_text() {
        let lines = parse_lyrics("[00:30.00][00:05.00]Chorus");

        let times: Vec<u64> = lines.iter().map(|l| l.time_ms()).collect();
        assert_eq!(times, [5000, 30_000]);
        assert!(lines.iter().all(|l| l.text() == "Chorus"));
    }

    #[test]
    fn output_is_sorted_by_time() {
        let src = "[00:20]c\n[00:05]a\n[00:10]b\n[00:05]a2\n[00:20]c2";
        let lines = parse_lyrics(src);

        assert_eq!(lines.len(), 3);
        assert!(lines.windows(2).all(|w| w[0].time_ms() < w[1].time_ms()));
        assert_eq!(lines[0].display_text(), "a (a2)");
        assert_eq!(lines[2].display_text(), "c (c2)");
    }

    #[test]
    fn drops_metadata_untagged_and_empty_lines() {
        let src = "[ar:Artist]\n[ti:Title]\nplain words\n[00:01.00]\n[00:02.00]   \n[00:03.00] kept \n";
        let lines = parse_lyrics(src);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "kept");
    }

    #[test]
    fn strips_brackets_anywhere_in_the_line() {
        let lines = parse_lyrics("[00:01.00]Hello [x] world[00:02.00]");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Hello  world");
        assert_eq!(lines[1].text(), "Hello  world");
    }

    #[test]
    fn rejects_malformed_timestamps() {
        for tag in ["[1:2]", "[00:5]", "[00:05.1]", "[00:05.1234]", "[aa:bb]", "[00-05]", "[:05]"] {
            assert!(parse_lyrics(&format!("{tag}text")).is_empty(), "{tag}");
        }
    }

    #[test]
    fn handles_crlf_and_unclosed_brackets() {
        let lines = parse_lyrics("[00:01.00]one\r\n[00:02.00]two [unclosed\r\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "one");
        assert_eq!(lines[1].text(), "two [unclosed");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_lyrics("").is_empty());
        assert!(parse_lyrics("no timing here\nat all").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let src = "[00:02]b\n[00:01]a\n[00:02]b2";
        assert_eq!(parse_lyrics(src), parse_lyrics(src));
    }
}
