// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftwise_domain::{DomainError, EmployeeId};
use thiserror::Error;

/// Errors raised by the recommendation engine.
///
/// Constraint violations are not errors; they travel as data on each
/// `Recommendation`. These variants describe malformed input or illegal
/// state changes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// The recommender configuration is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The configuration text could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// The same employee appears twice in the roster.
    #[error("Employee {0} appears more than once in the roster")]
    DuplicateEmployee(EmployeeId),

    /// A record refers to an employee missing from the roster.
    #[error("{record} refers to unknown employee {employee_id}")]
    UnknownEmployee {
        record: &'static str,
        employee_id: EmployeeId,
    },

    /// A shift was paired with a game it does not belong to.
    #[error("Employee {employee_id} has more than one weekly hours record for the week of {week_start}")]
    DuplicateWeeklyHours {
        employee_id: EmployeeId,
        week_start: time::Date,
    },

    #[error("Shift {shift_id} appears in more than one transition")]
    DuplicateTransition { shift_id: i64 },

    #[error("Shift {shift_id} belongs to game {shift_game_id}, not game {game_id}")]
    ShiftGameMismatch {
        shift_id: i64,
        shift_game_id: i64,
        game_id: i64,
    },

    /// A referenced shift does not exist.
    #[error("Shift {shift_id} not found")]
    ShiftNotFound { shift_id: i64 },
}
