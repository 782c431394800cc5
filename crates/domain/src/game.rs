// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Games, their generated shifts, and the scheduling cycle they belong to.

use crate::error::DomainError;
use crate::time_window::{TimeWindow, ranges_overlap};
use crate::types::{AssignmentStatus, EmployeeId, PositionType, Season};
use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Weekday};

/// One staffing position generated for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The canonical identifier.
    pub shift_id: i64,
    /// The game this shift belongs to.
    pub game_id: i64,
    /// The kind of position.
    pub position_type: PositionType,
    /// 1-based number within the position type.
    pub position_number: u8,
    /// The employee holding the shift, once assigned.
    #[serde(default)]
    pub assigned_employee: Option<EmployeeId>,
    /// Option A.
    #[serde(default)]
    pub recommended_primary: Option<EmployeeId>,
    /// Option B (may equal Option A).
    #[serde(default)]
    pub recommended_secondary: Option<EmployeeId>,
    /// Current assignment state.
    #[serde(default)]
    pub status: AssignmentStatus,
}

impl Shift {
    /// Creates a new unassigned shift.
    #[must_use]
    pub const fn new(
        shift_id: i64,
        game_id: i64,
        position_type: PositionType,
        position_number: u8,
    ) -> Self {
        Self {
            shift_id,
            game_id,
            position_type,
            position_number,
            assigned_employee: None,
            recommended_primary: None,
            recommended_secondary: None,
            status: AssignmentStatus::Unassigned,
        }
    }

    /// Returns both recommendation slots when populated.
    #[must_use]
    pub const fn recommendations(&self) -> Option<(EmployeeId, EmployeeId)> {
        match (self.recommended_primary, self.recommended_secondary) {
            (Some(primary), Some(secondary)) => Some((primary, secondary)),
            _ => None,
        }
    }

    /// Human-readable position label, e.g. "Referee 2".
    #[must_use]
    pub fn label(&self) -> String {
        let kind: &str = match self.position_type {
            PositionType::Supervisor => "Supervisor",
            PositionType::Referee => "Referee",
        };
        format!("{kind} {}", self.position_number)
    }
}

/// A scheduled game that needs staffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The canonical identifier.
    pub game_id: i64,
    /// Sport name, matching a `Sport` record.
    pub sport: String,
    /// Calendar date of the game.
    pub date: Date,
    /// Start and end time.
    pub window: TimeWindow,
    /// Venue.
    #[serde(default)]
    pub location: String,
    /// Number of supervisor positions.
    pub required_supervisors: u8,
    /// Number of referee positions.
    pub required_referees: u8,
    /// The scheduling cycle this game was planned in.
    #[serde(default)]
    pub cycle_id: Option<i64>,
    /// Staffing positions, in generation order.
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl Game {
    /// Creates a new game with no shifts.
    #[must_use]
    pub fn new(
        game_id: i64,
        sport: &str,
        date: Date,
        window: TimeWindow,
        required_supervisors: u8,
        required_referees: u8,
    ) -> Self {
        Self {
            game_id,
            sport: sport.to_string(),
            date,
            window,
            location: String::new(),
            required_supervisors,
            required_referees,
            cycle_id: None,
            shifts: Vec::new(),
        }
    }

    /// Generates this game's shifts deterministically.
    ///
    /// Supervisor positions 1..=S come first, then referee positions
    /// 1..=R. Shift identifiers are consecutive from `first_shift_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ShiftIdOverflow` if the identifiers would run
    /// past `i64::MAX`.
    pub fn generate_shifts(&self, first_shift_id: i64) -> Result<Vec<Shift>, DomainError> {
        let end: i64 = self.next_shift_id(first_shift_id)?;
        let supervisors = (1..=self.required_supervisors).map(|n| (PositionType::Supervisor, n));
        let referees = (1..=self.required_referees).map(|n| (PositionType::Referee, n));

        Ok(supervisors
            .chain(referees)
            .zip(first_shift_id..end)
            .map(|((position_type, number), shift_id)| {
                Shift::new(shift_id, self.game_id, position_type, number)
            })
            .collect())
    }

    /// Replaces the shift list with freshly generated shifts.
    ///
    /// Returns the next unused shift identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ShiftIdOverflow` if the identifiers would run
    /// past `i64::MAX`. The shift list is left unchanged in that case.
    pub fn populate_shifts(&mut self, first_shift_id: i64) -> Result<i64, DomainError> {
        self.shifts = self.generate_shifts(first_shift_id)?;
        self.next_shift_id(first_shift_id)
    }

    fn next_shift_id(&self, first_shift_id: i64) -> Result<i64, DomainError> {
        let generated: i64 = i64::from(self.required_supervisors) + i64::from(self.required_referees);
        first_shift_id
            .checked_add(generated)
            .ok_or(DomainError::ShiftIdOverflow {
                game_id: self.game_id,
                first_shift_id,
            })
    }

    /// Returns the day of week the game is played on.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the season the game falls in.
    #[must_use]
    pub const fn season(&self) -> Season {
        Season::for_date(self.date)
    }

    /// Returns the calendar year the game falls in.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn starts_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.window.start())
    }

    /// Returns the end instant.
    #[must_use]
    pub const fn ends_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.window.end())
    }

    /// Returns the game length in fractional hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.window.duration_hours()
    }

    /// Returns whether the two games overlap in time.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        ranges_overlap(
            &self.starts_at(),
            &self.ends_at(),
            &other.starts_at(),
            &other.ends_at(),
        )
    }

    /// Finds a shift by identifier.
    #[must_use]
    pub fn shift(&self, shift_id: i64) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.shift_id == shift_id)
    }

    /// Returns a filled shift of this game, other than `shift_id`, held by
    /// `employee_id`.
    #[must_use]
    pub fn holds_other_shift(&self, employee_id: EmployeeId, shift_id: i64) -> Option<&Shift> {
        self.shifts.iter().find(|s| {
            s.shift_id != shift_id
                && s.status.is_filled()
                && s.assigned_employee == Some(employee_id)
        })
    }
}

/// A scheduling window that games are planned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingCycle {
    /// The canonical identifier.
    pub cycle_id: i64,
    /// Display name, e.g. "Fall 2026 block 2".
    #[serde(default)]
    pub name: String,
    /// First day of the cycle (inclusive).
    pub start_date: Date,
    /// Last day of the cycle (inclusive).
    pub end_date: Date,
}

impl SchedulingCycle {
    /// Creates a new `SchedulingCycle`.
    #[must_use]
    pub fn new(cycle_id: i64, name: &str, start_date: Date, end_date: Date) -> Self {
        Self {
            cycle_id,
            name: name.to_string(),
            start_date,
            end_date,
        }
    }

    /// Returns whether the date falls inside the cycle window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        (self.start_date..=self.end_date).contains(&date)
    }
}
