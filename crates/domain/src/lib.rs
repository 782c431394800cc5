// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod error;
mod game;
mod time_window;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use availability::{
    PermanentConflict, SeasonalAvailability, TimeOffRequest, WeeklyHours, week_start_for,
};
pub use error::DomainError;
pub use game::{Game, SchedulingCycle, Shift};
pub use time_window::{TimeWindow, ranges_overlap};
pub use types::{
    AssignmentStatus, ConflictKind, Employee, EmployeeId, ExpertiseLevel,
    MAX_PERFORMANCE_RATING, MAX_WEEKLY_HOURS_CAP, PositionType, Season, Sport, TimeOffStatus,
};
pub use validation::{validate_cycle, validate_employee, validate_game, validate_weekly_hours};
