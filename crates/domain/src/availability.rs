// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-employee availability records.
//!
//! These are read-only snapshots supplied by the data-access layer. Each
//! record kind is an independent type; none of them validates anything
//! beyond its own shape.

use crate::error::DomainError;
use crate::time_window::TimeWindow;
use crate::types::{ConflictKind, EmployeeId, Season, TimeOffStatus};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Weekday};

/// A recurring weekly availability window for one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalAvailability {
    /// The employee this window belongs to.
    pub employee_id: EmployeeId,
    /// The season this window applies to.
    pub season: Season,
    /// The calendar year this window applies to.
    pub year: i32,
    /// The day of week.
    pub day_of_week: Weekday,
    /// The available time range.
    pub window: TimeWindow,
    /// Whether the employee prefers to work this window.
    #[serde(default)]
    pub preferred: bool,
}

impl SeasonalAvailability {
    /// Returns whether this entry applies to the given season and year.
    #[must_use]
    pub fn applies_to(&self, season: Season, year: i32) -> bool {
        self.season == season && self.year == year
    }

    /// Returns whether this entry covers part of the given day and window.
    #[must_use]
    pub fn matches(&self, day_of_week: Weekday, window: &TimeWindow) -> bool {
        self.day_of_week == day_of_week && self.window.overlaps(window)
    }
}

/// An unavoidable recurring unavailability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermanentConflict {
    /// The employee this conflict belongs to.
    pub employee_id: EmployeeId,
    /// Why the employee is unavailable.
    pub kind: ConflictKind,
    /// The day of week.
    pub day_of_week: Weekday,
    /// The blocked time range.
    pub window: TimeWindow,
    /// Free-text note, e.g. a course code.
    #[serde(default)]
    pub description: Option<String>,
}

impl PermanentConflict {
    /// Returns whether this conflict blocks part of the given day and window.
    #[must_use]
    pub fn blocks(&self, day_of_week: Weekday, window: &TimeWindow) -> bool {
        self.day_of_week == day_of_week && self.window.overlaps(window)
    }
}

/// A dated time-off request.
///
/// A request without a window covers the full day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// The employee requesting time off.
    pub employee_id: EmployeeId,
    /// The requested date.
    pub date: Date,
    /// The requested time range; `None` means the full day.
    #[serde(default)]
    pub window: Option<TimeWindow>,
    /// Review state. Only approved requests block scheduling.
    pub status: TimeOffStatus,
    /// Free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

impl TimeOffRequest {
    /// Returns whether this request covers the full day.
    #[must_use]
    pub const fn is_full_day(&self) -> bool {
        self.window.is_none()
    }

    /// Returns whether this request is approved and covers part of the
    /// given date and window.
    #[must_use]
    pub fn blocks(&self, date: Date, window: &TimeWindow) -> bool {
        if self.status != TimeOffStatus::Approved || self.date != date {
            return false;
        }
        self.window.is_none_or(|requested| requested.overlaps(window))
    }
}

/// An employee's scheduled hours for one Monday-aligned week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// The employee the total belongs to.
    pub employee_id: EmployeeId,
    /// The Monday the week starts on.
    pub week_start: Date,
    /// Total scheduled hours. Never negative.
    pub total_hours: f64,
}

impl WeeklyHours {
    /// Creates a new `WeeklyHours`.
    #[must_use]
    pub const fn new(employee_id: EmployeeId, week_start: Date, total_hours: f64) -> Self {
        Self {
            employee_id,
            week_start,
            total_hours,
        }
    }
}

/// Returns the Monday on or before `date`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the Monday would fall
/// before the earliest representable date.
pub fn week_start_for(date: Date) -> Result<Date, DomainError> {
    let offset: i64 = i64::from(date.weekday().number_days_from_monday());
    date.checked_sub(Duration::days(offset))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the week start of {date}"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn window(start: u8, end: u8) -> TimeWindow {
        TimeWindow::from_hm(start, 0, end, 0).unwrap()
    }

    fn time_off(status: TimeOffStatus, window: Option<TimeWindow>) -> TimeOffRequest {
        TimeOffRequest {
            employee_id: EmployeeId::new(1),
            date: date!(2026 - 10 - 17),
            window,
            status,
            reason: None,
        }
    }

    #[test]
    fn test_week_start_for_midweek_date() {
        assert_eq!(week_start_for(date!(2026 - 10 - 15)).unwrap(), date!(2026 - 10 - 12));
    }

    #[test]
    fn test_week_start_for_monday_is_identity() {
        assert_eq!(week_start_for(date!(2026 - 10 - 12)).unwrap(), date!(2026 - 10 - 12));
    }

    #[test]
    fn test_week_start_for_sunday_goes_back_six_days() {
        assert_eq!(week_start_for(date!(2026 - 10 - 18)).unwrap(), date!(2026 - 10 - 12));
    }

    #[test]
    fn test_full_day_time_off_blocks_any_window() {
        let request: TimeOffRequest = time_off(TimeOffStatus::Approved, None);
        assert!(request.is_full_day());
        assert!(request.blocks(date!(2026 - 10 - 17), &window(6, 8)));
        assert!(request.blocks(date!(2026 - 10 - 17), &window(20, 23)));
    }

    #[test]
    fn test_partial_time_off_blocks_only_overlap() {
        let request: TimeOffRequest = time_off(TimeOffStatus::Approved, Some(window(9, 12)));
        assert!(request.blocks(date!(2026 - 10 - 17), &window(11, 13)));
        assert!(!request.blocks(date!(2026 - 10 - 17), &window(12, 14)));
    }

    #[test]
    fn test_unapproved_time_off_never_blocks() {
        for status in [TimeOffStatus::Pending, TimeOffStatus::Denied] {
            let request: TimeOffRequest = time_off(status, None);
            assert!(!request.blocks(date!(2026 - 10 - 17), &window(9, 12)));
        }
    }

    #[test]
    fn test_time_off_on_other_date_never_blocks() {
        let request: TimeOffRequest = time_off(TimeOffStatus::Approved, None);
        assert!(!request.blocks(date!(2026 - 10 - 18), &window(9, 12)));
    }

    #[test]
    fn test_conflict_requires_same_weekday() {
        let conflict: PermanentConflict = PermanentConflict {
            employee_id: EmployeeId::new(1),
            kind: ConflictKind::Class,
            day_of_week: Weekday::Tuesday,
            window: window(9, 11),
            description: Some(String::from("CS 101")),
        };
        assert!(conflict.blocks(Weekday::Tuesday, &window(10, 12)));
        assert!(!conflict.blocks(Weekday::Wednesday, &window(10, 12)));
    }
}
