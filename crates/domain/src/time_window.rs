// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-of-day windows and overlap arithmetic.
//!
//! All overlap tests in the engine share one rule: two ranges overlap
//! unless one of them starts at or after the other's end. Touching
//! ranges (one ends exactly when the other starts) do not overlap.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Time;

time::serde::format_description!(hour_minute, Time, "[hour]:[minute]");

/// Returns whether two half-open ranges overlap.
///
/// Works for any ordered instant type (times of day, date-times).
#[must_use]
pub fn ranges_overlap<T: PartialOrd>(a_start: &T, a_end: &T, b_start: &T, b_end: &T) -> bool {
    !(a_start >= b_end || b_start >= a_end)
}

/// A time-of-day window that ends strictly after it starts.
///
/// Windows are validated on construction and on deserialization, so a
/// `TimeWindow` value is always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimeWindowRepr", into = "TimeWindowRepr")]
pub struct TimeWindow {
    start: Time,
    end: Time,
}

#[derive(Serialize, Deserialize)]
struct TimeWindowRepr {
    #[serde(with = "hour_minute")]
    start: Time,
    #[serde(with = "hour_minute")]
    end: Time,
}

impl TryFrom<TimeWindowRepr> for TimeWindow {
    type Error = DomainError;

    fn try_from(repr: TimeWindowRepr) -> Result<Self, Self::Error> {
        Self::new(repr.start, repr.end)
    }
}

impl From<TimeWindow> for TimeWindowRepr {
    fn from(window: TimeWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}

impl TimeWindow {
    /// Creates a new `TimeWindow`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeWindow` if `end` is not after `start`.
    pub fn new(start: Time, end: Time) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window from whole hours and minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is out of range or the window
    /// is empty.
    pub fn from_hm(
        start_hour: u8,
        start_minute: u8,
        end_hour: u8,
        end_minute: u8,
    ) -> Result<Self, DomainError> {
        let start: Time = time_of_day(start_hour, start_minute)?;
        let end: Time = time_of_day(end_hour, end_minute)?;
        Self::new(start, end)
    }

    /// Returns the window start.
    #[must_use]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// Returns the window end.
    #[must_use]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Returns whether this window overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        ranges_overlap(&self.start, &self.end, &other.start, &other.end)
    }

    /// Returns the window length in fractional hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).as_seconds_f64() / 3600.0
    }
}

fn time_of_day(hour: u8, minute: u8) -> Result<Time, DomainError> {
    Time::from_hms(hour, minute, 0).map_err(|_| DomainError::InvalidTimeOfDay { hour, minute })
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start.hour(),
            self.start.minute(),
            self.end.hour(),
            self.end.minute()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_window() {
        let result: Result<TimeWindow, DomainError> = TimeWindow::from_hm(10, 0, 10, 0);
        assert!(matches!(
            result,
            Err(DomainError::InvalidTimeWindow { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_window() {
        assert!(TimeWindow::from_hm(18, 0, 9, 0).is_err());
    }

    #[test]
    fn test_out_of_range_components_are_invalid_time_of_day() {
        assert_eq!(
            TimeWindow::from_hm(24, 0, 25, 0),
            Err(DomainError::InvalidTimeOfDay { hour: 24, minute: 0 })
        );
        assert_eq!(
            TimeWindow::from_hm(9, 0, 10, 60),
            Err(DomainError::InvalidTimeOfDay { hour: 10, minute: 60 })
        );
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let morning: TimeWindow = TimeWindow::from_hm(9, 0, 12, 0).unwrap();
        let afternoon: TimeWindow = TimeWindow::from_hm(12, 0, 15, 0).unwrap();
        assert!(!morning.overlaps(&afternoon));
        assert!(!afternoon.overlaps(&morning));
    }

    #[test]
    fn test_partial_overlap_is_symmetric() {
        let a: TimeWindow = TimeWindow::from_hm(9, 0, 12, 0).unwrap();
        let b: TimeWindow = TimeWindow::from_hm(11, 30, 13, 0).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer: TimeWindow = TimeWindow::from_hm(8, 0, 20, 0).unwrap();
        let inner: TimeWindow = TimeWindow::from_hm(10, 0, 11, 0).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_duration_hours() {
        let window: TimeWindow = TimeWindow::from_hm(18, 0, 20, 30).unwrap();
        assert!((window.duration_hours() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_uses_hour_minute() {
        let window: TimeWindow = TimeWindow::from_hm(9, 5, 17, 0).unwrap();
        assert_eq!(window.to_string(), "09:05-17:00");
    }

    #[test]
    fn test_deserialize_validates_window() {
        let ok: TimeWindow = serde_json::from_str(r#"{"start":"18:00","end":"21:00"}"#).unwrap();
        assert_eq!(ok, TimeWindow::from_hm(18, 0, 21, 0).unwrap());

        let inverted: Result<TimeWindow, serde_json::Error> =
            serde_json::from_str(r#"{"start":"21:00","end":"18:00"}"#);
        assert!(inverted.is_err());
    }

    #[test]
    fn test_serialize_round_trips_hour_minute_text() {
        let window: TimeWindow = TimeWindow::from_hm(7, 30, 9, 0).unwrap();
        let json: String = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"{"start":"07:30","end":"09:00"}"#);
    }
}
