// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cycle-wide recommendation runs.
//!
//! Games are processed in the order given. Within a game, shifts are
//! processed supervisors first, then referees, each by position number.
//! Every game starts with an empty exclusion set; each Option A chosen is
//! added to it before the next shift of that game is ranked.
//!
//! A game that fails validation or processing is recorded as an
//! `EventFailure` and the run moves on to the next game. Shift identifiers
//! must be unique across the whole run.

use crate::config::RecommenderConfig;
use crate::error::CoreError;
use crate::recommend::{ShiftRecommendation, recommend_for_shift};
use crate::snapshot::SchedulingData;
use serde::Serialize;
use shiftwise_domain::{
    AssignmentStatus, DomainError, EmployeeId, Game, SchedulingCycle, Shift, validate_cycle,
    validate_game,
};
use std::collections::{BTreeMap, HashSet};
use tracing::{info, warn};

/// A status change the caller should persist for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftTransition {
    /// The shift.
    pub shift_id: i64,
    /// The shift's game.
    pub game_id: i64,
    /// Status before the run.
    pub from: AssignmentStatus,
    /// Status after the run.
    pub to: AssignmentStatus,
    /// Option A.
    pub primary: EmployeeId,
    /// Option B (equal to Option A when only one candidate was eligible).
    pub secondary: EmployeeId,
}

/// A game the run could not process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventFailure {
    /// The game.
    pub game_id: i64,
    /// Description of the failure.
    pub reason: String,
}

/// The outcome of a cycle run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CycleReport {
    /// The cycle that was processed.
    pub cycle_id: i64,
    /// Ranked results keyed by shift identifier.
    pub recommendations: BTreeMap<i64, ShiftRecommendation>,
    /// Unassigned-to-recommended changes, in processing order.
    pub transitions: Vec<ShiftTransition>,
    /// Shifts that received no options, in processing order.
    pub unfilled_shifts: Vec<i64>,
    /// Games skipped because of invalid data or processing errors.
    pub failed_events: Vec<EventFailure>,
}

/// Runs the recommender over every shift of every game in a cycle.
///
/// # Arguments
///
/// * `cycle` - The scheduling window
/// * `games` - The cycle's games, in processing order
/// * `data` - Roster and per-employee lookups
/// * `config` - Engine settings
///
/// # Returns
///
/// A `CycleReport`. The input games are not modified; apply
/// `report.transitions` with `apply_transitions` to update them.
///
/// # Errors
///
/// Returns an error if the configuration or the cycle window is invalid.
/// Problems with individual games never abort the run.
pub fn process_cycle(
    cycle: &SchedulingCycle,
    games: &[Game],
    data: &SchedulingData,
    config: &RecommenderConfig,
) -> Result<CycleReport, CoreError> {
    config.validate()?;
    validate_cycle(cycle)?;

    info!(
        cycle_id = cycle.cycle_id,
        games = games.len(),
        employees = data.employees().len(),
        "Starting recommendation run"
    );

    let mut report: CycleReport = CycleReport {
        cycle_id: cycle.cycle_id,
        ..CycleReport::default()
    };

    let mut seen_shifts: HashSet<i64> = HashSet::new();

    for game in games {
        let outcome: Result<GameOutcome, CoreError> = claim_shift_ids(game, &mut seen_shifts)
            .and_then(|()| process_game(cycle, game, data, config));

        match outcome {
            Ok(outcome) => {
                report.transitions.extend(outcome.transitions);
                for result in outcome.results {
                    if result.is_empty() {
                        report.unfilled_shifts.push(result.shift_id);
                    }
                    report.recommendations.insert(result.shift_id, result);
                }
            }
            Err(err) => {
                warn!(game_id = game.game_id, error = %err, "Skipping game");
                report.failed_events.push(EventFailure {
                    game_id: game.game_id,
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(
        cycle_id = cycle.cycle_id,
        recommended = report.transitions.len(),
        unfilled = report.unfilled_shifts.len(),
        failed_games = report.failed_events.len(),
        "Recommendation run complete"
    );

    Ok(report)
}

/// Records the game's shift identifiers as used for this run.
///
/// Report entries are keyed by shift identifier, so a game reusing an
/// identifier already claimed by an earlier game is rejected as a whole
/// and claims nothing.
fn claim_shift_ids(game: &Game, seen: &mut HashSet<i64>) -> Result<(), CoreError> {
    if let Some(shift) = game
        .shifts
        .iter()
        .find(|shift| seen.contains(&shift.shift_id))
    {
        return Err(DomainError::InvalidGame {
            game_id: game.game_id,
            reason: format!(
                "Shift {} is already used by another game in this run",
                shift.shift_id
            ),
        }
        .into());
    }

    seen.extend(game.shifts.iter().map(|shift| shift.shift_id));
    Ok(())
}

struct GameOutcome {
    results: Vec<ShiftRecommendation>,
    transitions: Vec<ShiftTransition>,
}

/// Processes one game with its own exclusion set.
///
/// Results are collected locally and only merged into the report when the
/// whole game succeeds.
fn process_game(
    cycle: &SchedulingCycle,
    game: &Game,
    data: &SchedulingData,
    config: &RecommenderConfig,
) -> Result<GameOutcome, CoreError> {
    validate_game(game)?;
    if !cycle.contains(game.date) {
        return Err(DomainError::InvalidGame {
            game_id: game.game_id,
            reason: format!(
                "Date {} is outside cycle {} ({} to {})",
                game.date, cycle.cycle_id, cycle.start_date, cycle.end_date
            ),
        }
        .into());
    }

    let mut ordered: Vec<&Shift> = game.shifts.iter().collect();
    ordered.sort_by_key(|shift| (shift.position_type, shift.position_number));

    // Option A of shifts recommended in an earlier run still counts.
    let mut excluded: HashSet<EmployeeId> = ordered
        .iter()
        .filter(|shift| shift.status == AssignmentStatus::Recommended)
        .filter_map(|shift| shift.recommended_primary)
        .collect();

    let mut outcome: GameOutcome = GameOutcome {
        results: Vec::new(),
        transitions: Vec::new(),
    };

    for shift in ordered
        .into_iter()
        .filter(|shift| shift.status == AssignmentStatus::Unassigned)
    {
        let result: ShiftRecommendation =
            recommend_for_shift(shift, game, data, &excluded, config)?;

        match (result.option_a(), result.option_b()) {
            (Some(primary), Some(secondary)) => {
                outcome.transitions.push(ShiftTransition {
                    shift_id: shift.shift_id,
                    game_id: game.game_id,
                    from: shift.status,
                    to: AssignmentStatus::Recommended,
                    primary: primary.employee_id,
                    secondary: secondary.employee_id,
                });
                excluded.insert(primary.employee_id);
            }
            _ => {
                let reason: String = result
                    .empty_reason
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                warn!(
                    game_id = game.game_id,
                    shift_id = shift.shift_id,
                    position = %shift.label(),
                    reason = %reason,
                    "No recommendation for shift"
                );
            }
        }

        outcome.results.push(result);
    }

    info!(
        game_id = game.game_id,
        shifts = outcome.results.len(),
        recommended = outcome.transitions.len(),
        "Game processed"
    );

    Ok(outcome)
}
