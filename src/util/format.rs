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

/// Formats a number of seconds as `MM:SS`, or `H:MM:SS` from an hour up.
///
/// Negative and non-finite inputs format as zero.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65.4), "01:05");
/// assert_eq!(format_time(3725.0), "1:02:05");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Fraction of `duration` played at `position`, within `0.0..=1.0`.
pub(crate) fn progress_ratio(position: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        (position / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_hours() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(65.9), "01:05");
        assert_eq!(format_time(3725.0), "1:02:05");
    }

    #[test]
    fn bad_input_formats_as_zero() {
        assert_eq!(format_time(-3.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_ratio(30.0, 120.0), 0.25);
        assert_eq!(progress_ratio(130.0, 120.0), 1.0);
        assert_eq!(progress_ratio(10.0, 0.0), 0.0);
    }
}
