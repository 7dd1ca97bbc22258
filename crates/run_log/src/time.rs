//! Wall-clock time parsing and window filtering.

use chrono::NaiveTime;

use crate::error::{Error, Result};

/// Formats the logger uses for `wall_time`, with and without fractional seconds.
const WALL_TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M:%S"];

/// Parse a wall-time string with variable fractional-second precision.
pub fn parse_wall_time(value: &str) -> Result<NaiveTime> {
    WALL_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .ok_or_else(|| Error::BadTime {
            value: value.to_owned(),
        })
}

/// An inclusive wall-clock window used to narrow a log to a time range.
///
/// An unset bound is open; the default window keeps everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self { start, end }
    }

    /// Whether `time` falls inside the window.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start.is_none_or(|start| time >= start) && self.end.is_none_or(|end| time <= end)
    }
}

/// Seconds elapsed from `base` to `time`, for use as a plot x-axis.
///
/// Negative if `time` is before `base`; logs never span midnight in practice.
#[must_use]
pub fn elapsed_seconds(base: NaiveTime, time: NaiveTime) -> f32 {
    (time - base).num_milliseconds() as f32 / 1000.0
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::{TimeWindow, elapsed_seconds, parse_wall_time};

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn parses_with_and_without_fraction() {
        assert_eq!(parse_wall_time("22:54:36").unwrap(), time(22, 54, 36));

        let with_fraction = parse_wall_time("22:54:36.3").unwrap();
        assert_eq!(
            with_fraction,
            NaiveTime::from_hms_milli_opt(22, 54, 36, 300).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_wall_time("yesterday").is_err());
        assert!(parse_wall_time("").is_err());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = TimeWindow::new(Some(time(10, 0, 0)), Some(time(10, 0, 10)));

        assert!(window.contains(time(10, 0, 0)));
        assert!(window.contains(time(10, 0, 5)));
        assert!(window.contains(time(10, 0, 10)));
        assert!(!window.contains(time(9, 59, 59)));
        assert!(!window.contains(time(10, 0, 11)));
    }

    #[test]
    fn default_window_keeps_everything() {
        let window = TimeWindow::default();
        assert!(window.contains(time(0, 0, 0)));
        assert!(window.contains(time(23, 59, 59)));
    }

    #[test]
    fn half_open_window() {
        let from = TimeWindow::new(Some(time(12, 0, 0)), None);
        assert!(from.contains(time(23, 0, 0)));
        assert!(!from.contains(time(11, 0, 0)));

        let until = TimeWindow::new(None, Some(time(12, 0, 0)));
        assert!(until.contains(time(11, 0, 0)));
        assert!(!until.contains(time(13, 0, 0)));
    }

    #[test]
    fn elapsed_seconds_from_base() {
        let base = parse_wall_time("22:54:36.2").unwrap();
        let later = parse_wall_time("22:54:37.7").unwrap();

        assert!((elapsed_seconds(base, later) - 1.5).abs() < 1e-6);
        assert!((elapsed_seconds(base, base)).abs() < 1e-6);
    }
}
