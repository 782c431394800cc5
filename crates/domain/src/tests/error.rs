// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssignmentStatus, DomainError, EmployeeId};
use time::macros::{date, time};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidTimeWindow {
        start: time!(18:00),
        end: time!(17:30),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid time window: end 17:30 is not after start 18:00"
    );

    let err: DomainError = DomainError::InvalidEmployee {
        employee_id: EmployeeId::new(7),
        reason: String::from("test"),
    };
    assert_eq!(format!("{err}"), "Invalid employee 7: test");

    let err: DomainError = DomainError::InvalidGame {
        game_id: 12,
        reason: String::from("test"),
    };
    assert_eq!(format!("{err}"), "Invalid game 12: test");

    let err: DomainError = DomainError::InvalidWeeklyHours {
        employee_id: EmployeeId::new(7),
        total_hours: -2.5,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid weekly hours for employee 7: -2.5. Must be a non-negative number"
    );

    let err: DomainError = DomainError::WeekStartNotMonday {
        employee_id: EmployeeId::new(7),
        week_start: date!(2026 - 10 - 14),
        weekday: time::Weekday::Wednesday,
    };
    assert_eq!(
        format!("{err}"),
        "Weekly hours for employee 7 must start on a Monday, but 2026-10-14 is a Wednesday"
    );

    let err: DomainError = DomainError::InvalidTimeOfDay {
        hour: 24,
        minute: 5,
    };
    assert_eq!(format!("{err}"), "Invalid time of day: 24:05");

    let err: DomainError = DomainError::ShiftIdOverflow {
        game_id: 4,
        first_shift_id: i64::MAX,
    };
    assert_eq!(
        format!("{err}"),
        format!("Shift identifiers for game 4 starting at {} would overflow", i64::MAX)
    );

    let err: DomainError = DomainError::InvalidExpertiseLevel(String::from("GURU"));
    assert_eq!(format!("{err}"), "Invalid expertise level: GURU");

    let err: DomainError = DomainError::InvalidStatusTransition {
        shift_id: 3,
        from: AssignmentStatus::Confirmed,
        to: AssignmentStatus::Recommended,
    };
    assert_eq!(
        format!("{err}"),
        "Shift 3 cannot transition from CONFIRMED to RECOMMENDED"
    );
}
