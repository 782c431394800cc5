// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AssignmentStatus, EmployeeId};

/// Errors that can occur during domain validation.
///
/// These represent defects in upstream data. They are raised at the
/// boundary and never tolerated inside scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A time window does not end strictly after it starts.
    InvalidTimeWindow {
        /// The window start.
        start: time::Time,
        /// The window end.
        end: time::Time,
    },
    /// An employee record failed field validation.
    InvalidEmployee {
        /// The offending employee.
        employee_id: EmployeeId,
        /// Description of the validation error.
        reason: String,
    },
    /// A game record failed field validation.
    InvalidGame {
        /// The offending game.
        game_id: i64,
        /// Description of the validation error.
        reason: String,
    },
    /// An hour or minute is outside the time of day.
    InvalidTimeOfDay {
        /// The hour given.
        hour: u8,
        /// The minute given.
        minute: u8,
    },
    /// Generated shift identifiers would overflow.
    ShiftIdOverflow {
        /// The game whose shifts were being generated.
        game_id: i64,
        /// The requested first identifier.
        first_shift_id: i64,
    },
    /// A weekly-hours total is negative or not a finite number.
    InvalidWeeklyHours {
        /// The employee the record belongs to.
        employee_id: EmployeeId,
        /// The rejected total.
        total_hours: f64,
    },
    /// A weekly-hours record is not aligned to a Monday.
    WeekStartNotMonday {
        /// The employee the record belongs to.
        employee_id: EmployeeId,
        /// The misaligned week start.
        week_start: time::Date,
        /// The actual weekday.
        weekday: time::Weekday,
    },
    /// A scheduling cycle has an inverted window.
    InvalidCycle {
        /// The offending cycle.
        cycle_id: i64,
        /// Description of the validation error.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Expertise level text could not be parsed.
    InvalidExpertiseLevel(String),
    /// Position type text could not be parsed.
    InvalidPositionType(String),
    /// Assignment status text could not be parsed.
    InvalidAssignmentStatus(String),
    /// A shift status change is not permitted by the shift state machine.
    InvalidStatusTransition {
        /// The shift being changed.
        shift_id: i64,
        /// The current status.
        from: AssignmentStatus,
        /// The requested status.
        to: AssignmentStatus,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeWindow { start, end } => {
                write!(
                    f,
                    "Invalid time window: end {:02}:{:02} is not after start {:02}:{:02}",
                    end.hour(),
                    end.minute(),
                    start.hour(),
                    start.minute()
                )
            }
            Self::InvalidTimeOfDay { hour, minute } => {
                write!(f, "Invalid time of day: {hour:02}:{minute:02}")
            }
            Self::ShiftIdOverflow {
                game_id,
                first_shift_id,
            } => write!(
                f,
                "Shift identifiers for game {game_id} starting at {first_shift_id} would overflow"
            ),
            Self::InvalidEmployee {
                employee_id,
                reason,
            } => write!(f, "Invalid employee {employee_id}: {reason}"),
            Self::InvalidGame { game_id, reason } => {
                write!(f, "Invalid game {game_id}: {reason}")
            }
            Self::InvalidWeeklyHours {
                employee_id,
                total_hours,
            } => {
                write!(
                    f,
                    "Invalid weekly hours for employee {employee_id}: {total_hours}. Must be a non-negative number"
                )
            }
            Self::WeekStartNotMonday {
                employee_id,
                week_start,
                weekday,
            } => {
                write!(
                    f,
                    "Weekly hours for employee {employee_id} must start on a Monday, but {week_start} is a {weekday}"
                )
            }
            Self::InvalidCycle { cycle_id, reason } => {
                write!(f, "Invalid scheduling cycle {cycle_id}: {reason}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidExpertiseLevel(value) => {
                write!(f, "Invalid expertise level: {value}")
            }
            Self::InvalidPositionType(value) => write!(f, "Invalid position type: {value}"),
            Self::InvalidAssignmentStatus(value) => {
                write!(f, "Invalid assignment status: {value}")
            }
            Self::InvalidStatusTransition { shift_id, from, to } => {
                write!(
                    f,
                    "Shift {shift_id} cannot transition from {from} to {to}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
