// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Canonical identifier of an employee.
///
/// Every per-employee lookup table is keyed by this value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An employee's recorded expertise in one sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpertiseLevel {
    /// New to officiating this sport.
    Beginner,
    /// Comfortable with routine games.
    Intermediate,
    /// Trusted with any game.
    Expert,
}

impl ExpertiseLevel {
    /// Converts this level to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Expert => "EXPERT",
        }
    }
}

impl FromStr for ExpertiseLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BEGINNER" => Ok(Self::Beginner),
            "INTERMEDIATE" => Ok(Self::Intermediate),
            "EXPERT" => Ok(Self::Expert),
            _ => Err(DomainError::InvalidExpertiseLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The upper bound accepted for `Employee::max_hours_per_week`.
pub const MAX_WEEKLY_HOURS_CAP: u8 = 80;

/// The upper bound of the performance rating scale.
pub const MAX_PERFORMANCE_RATING: f64 = 5.0;

/// A staff member who may be recommended for shifts.
///
/// Employees are created and edited by external workflows. The engine
/// only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The canonical identifier.
    pub employee_id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Weekly hour ceiling (1 through `MAX_WEEKLY_HOURS_CAP`).
    pub max_hours_per_week: u8,
    /// Whether the employee may fill supervisor positions.
    #[serde(default)]
    pub supervisor_eligible: bool,
    /// Inactive employees are never eligible.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Performance rating from 0.0 to 5.0.
    #[serde(default)]
    pub performance_rating: f64,
    /// Expertise per sport, keyed by sport name.
    #[serde(default)]
    pub expertise: BTreeMap<String, ExpertiseLevel>,
}

const fn default_active() -> bool {
    true
}

impl Employee {
    /// Creates a new active employee with no rating, no expertise, and
    /// no supervisor eligibility.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The canonical identifier
    /// * `name` - Display name
    /// * `max_hours_per_week` - Weekly hour ceiling
    #[must_use]
    pub fn new(employee_id: EmployeeId, name: &str, max_hours_per_week: u8) -> Self {
        Self {
            employee_id,
            name: name.to_string(),
            max_hours_per_week,
            supervisor_eligible: false,
            active: true,
            performance_rating: 0.0,
            expertise: BTreeMap::new(),
        }
    }

    /// Sets supervisor eligibility.
    #[must_use]
    pub const fn with_supervisor_eligible(mut self, eligible: bool) -> Self {
        self.supervisor_eligible = eligible;
        self
    }

    /// Sets the performance rating.
    #[must_use]
    pub const fn with_performance_rating(mut self, rating: f64) -> Self {
        self.performance_rating = rating;
        self
    }

    /// Records expertise in a sport.
    #[must_use]
    pub fn with_expertise(mut self, sport: &str, level: ExpertiseLevel) -> Self {
        self.expertise.insert(sport.to_string(), level);
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns the employee's expertise in the given sport, if recorded.
    #[must_use]
    pub fn expertise_in(&self, sport: &str) -> Option<ExpertiseLevel> {
        self.expertise.get(sport).copied()
    }

    /// Returns the weekly ceiling as fractional hours.
    #[must_use]
    pub fn max_hours(&self) -> f64 {
        f64::from(self.max_hours_per_week)
    }
}

/// Sport metadata referenced by games.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sport {
    /// The canonical identifier.
    pub sport_id: i64,
    /// The sport name, as referenced by games and expertise maps.
    pub name: String,
}

impl Sport {
    /// Creates a new `Sport`.
    #[must_use]
    pub fn new(sport_id: i64, name: &str) -> Self {
        Self {
            sport_id,
            name: name.to_string(),
        }
    }
}

/// The kind of staffing position a shift represents.
///
/// The derived ordering places supervisors before referees, which is the
/// order shifts are generated and processed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionType {
    /// Game supervisor.
    Supervisor,
    /// Game referee.
    Referee,
}

impl PositionType {
    /// Converts this position type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Supervisor => "SUPERVISOR",
            Self::Referee => "REFEREE",
        }
    }

    /// Returns whether the employee's role permits this position.
    ///
    /// Supervisor positions require supervisor eligibility. Referee
    /// positions admit any active employee.
    #[must_use]
    pub const fn admits(&self, employee: &Employee) -> bool {
        match self {
            Self::Supervisor => employee.active && employee.supervisor_eligible,
            Self::Referee => employee.active,
        }
    }
}

impl FromStr for PositionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUPERVISOR" => Ok(Self::Supervisor),
            "REFEREE" => Ok(Self::Referee),
            _ => Err(DomainError::InvalidPositionType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PositionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The assignment state of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// No recommendation and no assignee.
    #[default]
    Unassigned,
    /// Both recommendation slots populated, nobody assigned yet.
    Recommended,
    /// An administrator accepted an option or assigned manually.
    Assigned,
    /// The assignee confirmed.
    Confirmed,
}

impl AssignmentStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unassigned => "UNASSIGNED",
            Self::Recommended => "RECOMMENDED",
            Self::Assigned => "ASSIGNED",
            Self::Confirmed => "CONFIRMED",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - `Unassigned` → `Recommended`
    /// - `Unassigned` → `Assigned` (manual assignment)
    /// - `Recommended` → `Assigned`
    /// - `Assigned` → `Confirmed`
    /// - `Recommended` → `Unassigned` and `Assigned` → `Unassigned` (clearing)
    ///
    /// `Recommended` never becomes `Assigned` on its own; callers must
    /// issue an explicit assignment.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Unassigned, Self::Recommended | Self::Assigned)
                | (Self::Recommended, Self::Assigned | Self::Unassigned)
                | (Self::Assigned, Self::Confirmed | Self::Unassigned)
        )
    }

    /// Returns whether a person holds this shift.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Assigned | Self::Confirmed)
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNASSIGNED" => Ok(Self::Unassigned),
            "RECOMMENDED" => Ok(Self::Recommended),
            "ASSIGNED" => Ok(Self::Assigned),
            "CONFIRMED" => Ok(Self::Confirmed),
            _ => Err(DomainError::InvalidAssignmentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The academic season an availability window applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    /// August through December.
    Fall,
    /// January through May.
    Spring,
    /// June and July.
    Summer,
}

impl Season {
    /// Returns the season a calendar date falls in.
    #[must_use]
    pub const fn for_date(date: time::Date) -> Self {
        match date.month() {
            time::Month::January
            | time::Month::February
            | time::Month::March
            | time::Month::April
            | time::Month::May => Self::Spring,
            time::Month::June | time::Month::July => Self::Summer,
            time::Month::August
            | time::Month::September
            | time::Month::October
            | time::Month::November
            | time::Month::December => Self::Fall,
        }
    }
}

/// The reason behind a permanent conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// A class meeting.
    Class,
    /// Another job.
    Job,
    /// Anything else.
    Other,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            Self::Class => "class",
            Self::Job => "job",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// Review state of a time-off request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeOffStatus {
    /// Awaiting review.
    Pending,
    /// Approved; blocks scheduling.
    Approved,
    /// Denied; ignored.
    Denied,
}
