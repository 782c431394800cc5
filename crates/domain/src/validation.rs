// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::WeeklyHours;
use crate::error::DomainError;
use crate::game::{Game, SchedulingCycle};
use crate::types::{Employee, MAX_PERFORMANCE_RATING, MAX_WEEKLY_HOURS_CAP, PositionType};
use std::collections::HashSet;

/// Validates that an employee's field constraints are met.
///
/// # Arguments
///
/// * `employee` - The employee to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The weekly maximum is zero or above `MAX_WEEKLY_HOURS_CAP`
/// - The performance rating is outside 0.0 through 5.0
pub fn validate_employee(employee: &Employee) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if employee.name.trim().is_empty() {
        return Err(DomainError::InvalidEmployee {
            employee_id: employee.employee_id,
            reason: String::from("Name cannot be empty"),
        });
    }

    // Rule: weekly maximum is a bounded positive integer
    if employee.max_hours_per_week == 0 || employee.max_hours_per_week > MAX_WEEKLY_HOURS_CAP {
        return Err(DomainError::InvalidEmployee {
            employee_id: employee.employee_id,
            reason: format!(
                "Max hours per week must be between 1 and {MAX_WEEKLY_HOURS_CAP}, got {}",
                employee.max_hours_per_week
            ),
        });
    }

    // Rule: rating lives on the 0-5 scale
    if !(0.0..=MAX_PERFORMANCE_RATING).contains(&employee.performance_rating) {
        return Err(DomainError::InvalidEmployee {
            employee_id: employee.employee_id,
            reason: format!(
                "Performance rating must be between 0.0 and {MAX_PERFORMANCE_RATING}, got {}",
                employee.performance_rating
            ),
        });
    }

    Ok(())
}

/// Validates a game and the shifts it owns.
///
/// The time window is already guaranteed well formed by `TimeWindow`.
///
/// # Errors
///
/// Returns an error if:
/// - The sport is empty
/// - A shift belongs to a different game
/// - Shift identifiers repeat
/// - A shift's position number is zero or exceeds the required count for its type
pub fn validate_game(game: &Game) -> Result<(), DomainError> {
    let invalid = |reason: String| DomainError::InvalidGame {
        game_id: game.game_id,
        reason,
    };

    if game.sport.trim().is_empty() {
        return Err(invalid(String::from("Sport cannot be empty")));
    }

    let mut seen: HashSet<i64> = HashSet::new();
    for shift in &game.shifts {
        if shift.game_id != game.game_id {
            return Err(invalid(format!(
                "Shift {} belongs to game {}",
                shift.shift_id, shift.game_id
            )));
        }

        if !seen.insert(shift.shift_id) {
            return Err(invalid(format!("Shift {} appears twice", shift.shift_id)));
        }

        let required: u8 = match shift.position_type {
            PositionType::Supervisor => game.required_supervisors,
            PositionType::Referee => game.required_referees,
        };
        if shift.position_number == 0 || shift.position_number > required {
            return Err(invalid(format!(
                "{} position {} is outside 1..={required}",
                shift.position_type, shift.position_number
            )));
        }
    }

    Ok(())
}

/// Validates a weekly-hours record.
///
/// # Errors
///
/// Returns an error if the total is negative or not finite, or if the
/// week does not start on a Monday.
pub fn validate_weekly_hours(record: &WeeklyHours) -> Result<(), DomainError> {
    if !record.total_hours.is_finite() || record.total_hours < 0.0 {
        return Err(DomainError::InvalidWeeklyHours {
            employee_id: record.employee_id,
            total_hours: record.total_hours,
        });
    }

    let weekday: time::Weekday = record.week_start.weekday();
    if weekday != time::Weekday::Monday {
        return Err(DomainError::WeekStartNotMonday {
            employee_id: record.employee_id,
            week_start: record.week_start,
            weekday,
        });
    }

    Ok(())
}

/// Validates that a scheduling cycle's window is not inverted.
///
/// # Errors
///
/// Returns an error if the end date precedes the start date.
pub fn validate_cycle(cycle: &SchedulingCycle) -> Result<(), DomainError> {
    if cycle.end_date < cycle.start_date {
        return Err(DomainError::InvalidCycle {
            cycle_id: cycle.cycle_id,
            reason: format!(
                "End date {} is before start date {}",
                cycle.end_date, cycle.start_date
            ),
        });
    }
    Ok(())
}
