// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hard-constraint evaluation for one (candidate, shift) pair.
//!
//! ## Evaluation order
//!
//! 1. Inactive employee (short-circuits everything else)
//! 2. Seasonal availability
//! 3. Permanent conflicts
//! 4. Approved time off
//! 5. Double-booking against other assigned games
//! 6. Another filled position in the same game
//! 7. Weekly-hour ceiling
//!
//! Every check after the first runs even when an earlier one failed, so
//! the full list of reasons is available for diagnostics.

use crate::config::RecommenderConfig;
use crate::snapshot::CandidateContext;
use serde::Serialize;
use shiftwise_domain::{ConflictKind, Game, SeasonalAvailability, Shift, TimeWindow};
use time::{Date, Weekday};

/// A hard constraint a candidate fails for a shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The employee is not active.
    Inactive,
    /// No seasonal availability window covers the game.
    Unavailable {
        /// The game's day of week.
        day_of_week: Weekday,
        /// The game's time window.
        window: TimeWindow,
    },
    /// A permanent conflict overlaps the game.
    PermanentConflict {
        /// The conflict kind.
        conflict_kind: ConflictKind,
        /// The day of week.
        day_of_week: Weekday,
        /// The blocked window.
        window: TimeWindow,
    },
    /// Approved time off covers the game.
    TimeOff {
        /// The date of the time off.
        date: Date,
        /// The requested window; `None` for a full day.
        window: Option<TimeWindow>,
    },
    /// The employee is assigned to another game at the same time.
    DoubleBooked {
        /// The overlapping game.
        game_id: i64,
    },
    /// The employee already holds another position in this game.
    AlreadyInGame {
        /// The shift the employee holds.
        shift_id: i64,
    },
    /// Taking the shift would push the employee past their weekly ceiling.
    WeeklyLimitExceeded {
        /// Current plus this game's hours.
        projected_hours: f64,
        /// The employee's weekly maximum.
        max_hours: f64,
    },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive => write!(f, "employee is inactive"),
            Self::Unavailable {
                day_of_week,
                window,
            } => write!(f, "not available on {day_of_week} {window}"),
            Self::PermanentConflict {
                conflict_kind,
                day_of_week,
                window,
            } => write!(f, "{conflict_kind} conflict on {day_of_week} {window}"),
            Self::TimeOff { date, window } => match window {
                Some(window) => write!(f, "approved time off on {date} {window}"),
                None => write!(f, "approved time off on {date} (full day)"),
            },
            Self::DoubleBooked { game_id } => {
                write!(f, "already assigned to overlapping game {game_id}")
            }
            Self::AlreadyInGame { shift_id } => {
                write!(f, "already holds shift {shift_id} in this game")
            }
            Self::WeeklyLimitExceeded {
                projected_hours,
                max_hours,
            } => write!(
                f,
                "exceeds weekly limit ({projected_hours:.1}/{max_hours:.1} hours)"
            ),
        }
    }
}

/// Evaluates every hard constraint for a candidate.
///
/// This function is pure: it reads only its arguments.
///
/// # Arguments
///
/// * `shift` - The shift being filled
/// * `game` - The shift's game
/// * `candidate` - The candidate and their per-employee records
/// * `config` - Engine settings (availability fallback policy)
///
/// # Returns
///
/// The violated constraints in evaluation order. An empty list means the
/// candidate is eligible.
#[must_use]
pub fn validate_candidate(
    shift: &Shift,
    game: &Game,
    candidate: &CandidateContext<'_>,
    config: &RecommenderConfig,
) -> Vec<Violation> {
    if !candidate.employee.active {
        return vec![Violation::Inactive];
    }

    let mut violations: Vec<Violation> = Vec::new();
    let day_of_week: Weekday = game.weekday();

    if !is_available(game, candidate.availability, config) {
        violations.push(Violation::Unavailable {
            day_of_week,
            window: game.window,
        });
    }

    violations.extend(
        candidate
            .conflicts
            .iter()
            .filter(|conflict| conflict.blocks(day_of_week, &game.window))
            .map(|conflict| Violation::PermanentConflict {
                conflict_kind: conflict.kind,
                day_of_week,
                window: conflict.window,
            }),
    );

    violations.extend(
        candidate
            .time_off
            .iter()
            .filter(|request| request.blocks(game.date, &game.window))
            .map(|request| Violation::TimeOff {
                date: request.date,
                window: request.window,
            }),
    );

    violations.extend(
        candidate
            .assigned_games
            .iter()
            .filter(|other| other.game_id != game.game_id && other.overlaps(game))
            .map(|other| Violation::DoubleBooked {
                game_id: other.game_id,
            }),
    );

    if let Some(held) = game.holds_other_shift(candidate.employee.employee_id, shift.shift_id) {
        violations.push(Violation::AlreadyInGame {
            shift_id: held.shift_id,
        });
    }

    let projected_hours: f64 = candidate.current_weekly_hours() + game.duration_hours();
    let max_hours: f64 = candidate.employee.max_hours();
    if projected_hours > max_hours {
        violations.push(Violation::WeeklyLimitExceeded {
            projected_hours,
            max_hours,
        });
    }

    violations
}

/// Returns whether the candidate's seasonal availability covers the game.
///
/// Only entries for the game's season and year count. An employee with no
/// such entries is treated as available when the permissive fallback is
/// enabled.
fn is_available(
    game: &Game,
    availability: &[SeasonalAvailability],
    config: &RecommenderConfig,
) -> bool {
    let mut seasonal = availability
        .iter()
        .filter(|entry| entry.applies_to(game.season(), game.year()))
        .peekable();

    if seasonal.peek().is_none() {
        return config.permissive_missing_availability;
    }

    seasonal.any(|entry| entry.matches(game.weekday(), &game.window))
}
