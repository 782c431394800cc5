// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ranked candidate selection for a single shift.
//!
//! The recommender filters the roster by position eligibility, runs every
//! remaining candidate through `validate_candidate`, scores the eligible
//! ones with `score_candidate`, applies the exclusion penalty, and keeps
//! the best `MAX_OPTIONS`.

use crate::config::{RecommenderConfig, TieBreak};
use crate::constraints::{Violation, validate_candidate};
use crate::error::CoreError;
use crate::scoring::{CandidateScore, ScoreBreakdown, ScoreComponent, Warning, score_candidate};
use crate::snapshot::{CandidateContext, SchedulingData};
use serde::Serialize;
use shiftwise_domain::{Employee, EmployeeId, Game, PositionType, Shift};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// The number of options kept per shift (Option A and Option B).
pub const MAX_OPTIONS: usize = 2;

/// A scored candidate for a shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// The candidate.
    pub employee_id: EmployeeId,
    /// The candidate's name, for display.
    pub employee_name: String,
    /// Final score. Pinned to the violation sentinel when `violations` is non-empty.
    pub score: f64,
    /// Weighted contributions. Empty for rejected candidates.
    pub breakdown: ScoreBreakdown,
    /// Hard constraints the candidate fails.
    pub violations: Vec<Violation>,
    /// Non-blocking notes.
    pub warnings: Vec<Warning>,
}

impl Recommendation {
    /// Returns whether the candidate passed every hard constraint.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.violations.is_empty()
    }

    fn rejected(employee: &Employee, violations: Vec<Violation>, sentinel: f64) -> Self {
        Self {
            employee_id: employee.employee_id,
            employee_name: employee.name.clone(),
            score: sentinel,
            breakdown: ScoreBreakdown::default(),
            violations,
            warnings: Vec::new(),
        }
    }

    fn scored(employee: &Employee, score: CandidateScore) -> Self {
        Self {
            employee_id: employee.employee_id,
            employee_name: employee.name.clone(),
            score: score.total,
            breakdown: score.breakdown,
            violations: Vec::new(),
            warnings: score.warnings,
        }
    }
}

/// Why a shift received no options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyReason {
    /// The game's sport has no sport record.
    MissingSport {
        /// The unknown sport name.
        sport: String,
    },
    /// Nobody on the roster may fill this position type.
    NoEligibleCandidates {
        /// The position type.
        position_type: PositionType,
    },
    /// Every role-eligible candidate has at least one violation.
    AllCandidatesRejected {
        /// How many candidates were rejected.
        rejected: usize,
    },
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSport { sport } => write!(f, "no sport record for '{sport}'"),
            Self::NoEligibleCandidates { position_type } => {
                write!(f, "no employees eligible for {position_type} positions")
            }
            Self::AllCandidatesRejected { rejected } => {
                write!(f, "all {rejected} candidates violate hard constraints")
            }
        }
    }
}

/// The ranked result for one shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecommendation {
    /// The shift.
    pub shift_id: i64,
    /// The shift's game.
    pub game_id: i64,
    /// At most `MAX_OPTIONS` eligible candidates, best first.
    pub options: Vec<Recommendation>,
    /// Candidates that failed a hard constraint, kept for diagnostics.
    pub rejected: Vec<Recommendation>,
    /// Set when `options` is empty.
    pub empty_reason: Option<EmptyReason>,
}

impl ShiftRecommendation {
    fn empty(shift: &Shift, rejected: Vec<Recommendation>, reason: EmptyReason) -> Self {
        Self {
            shift_id: shift.shift_id,
            game_id: shift.game_id,
            options: Vec::new(),
            rejected,
            empty_reason: Some(reason),
        }
    }

    /// Returns Option A.
    #[must_use]
    pub fn option_a(&self) -> Option<&Recommendation> {
        self.options.first()
    }

    /// Returns Option B, which is Option A when only one candidate is eligible.
    #[must_use]
    pub fn option_b(&self) -> Option<&Recommendation> {
        self.options.get(1).or_else(|| self.option_a())
    }

    /// Returns whether no candidate could be recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Recommends up to `MAX_OPTIONS` candidates for a shift.
///
/// # Arguments
///
/// * `shift` - The shift to fill
/// * `game` - The shift's game
/// * `data` - Roster and per-employee lookups
/// * `excluded` - Employees already chosen as Option A for an earlier
///   shift of the same game
/// * `config` - Weights, penalty, and policy switches
///
/// # Returns
///
/// A `ShiftRecommendation`. An empty option list is a normal outcome and
/// carries an `EmptyReason`.
///
/// # Errors
///
/// Returns an error if the shift does not belong to the game, or if the
/// game's week cannot be computed.
pub fn recommend_for_shift(
    shift: &Shift,
    game: &Game,
    data: &SchedulingData,
    excluded: &HashSet<EmployeeId>,
    config: &RecommenderConfig,
) -> Result<ShiftRecommendation, CoreError> {
    if shift.game_id != game.game_id {
        return Err(CoreError::ShiftGameMismatch {
            shift_id: shift.shift_id,
            shift_game_id: shift.game_id,
            game_id: game.game_id,
        });
    }

    if data.sport(&game.sport).is_none() {
        return Ok(ShiftRecommendation::empty(
            shift,
            Vec::new(),
            EmptyReason::MissingSport {
                sport: game.sport.clone(),
            },
        ));
    }

    let pool: Vec<&Employee> = data
        .employees()
        .iter()
        .filter(|employee| shift.position_type.admits(employee))
        .collect();

    if pool.is_empty() {
        return Ok(ShiftRecommendation::empty(
            shift,
            Vec::new(),
            EmptyReason::NoEligibleCandidates {
                position_type: shift.position_type,
            },
        ));
    }

    let mut eligible: Vec<Recommendation> = Vec::new();
    let mut rejected: Vec<Recommendation> = Vec::new();

    for employee in pool {
        let candidate: CandidateContext<'_> = data.context_for(employee, game)?;
        let violations: Vec<Violation> = validate_candidate(shift, game, &candidate, config);

        if !violations.is_empty() {
            debug!(
                shift_id = shift.shift_id,
                employee_id = %employee.employee_id,
                violations = violations.len(),
                "Candidate rejected"
            );
            rejected.push(Recommendation::rejected(
                employee,
                violations,
                config.violation_score,
            ));
            continue;
        }

        let mut score: CandidateScore = score_candidate(game, &candidate, config);
        if excluded.contains(&employee.employee_id) {
            apply_exclusion_penalty(&mut score, config.exclusion_penalty);
        }
        eligible.push(Recommendation::scored(employee, score));
    }

    if eligible.is_empty() {
        let count: usize = rejected.len();
        return Ok(ShiftRecommendation::empty(
            shift,
            rejected,
            EmptyReason::AllCandidatesRejected { rejected: count },
        ));
    }

    rank(&mut eligible, config.tie_break);
    eligible.truncate(MAX_OPTIONS);

    debug!(
        shift_id = shift.shift_id,
        options = eligible.len(),
        rejected = rejected.len(),
        "Shift ranked"
    );

    Ok(ShiftRecommendation {
        shift_id: shift.shift_id,
        game_id: game.game_id,
        options: eligible,
        rejected,
        empty_reason: None,
    })
}

/// Subtracts the exclusion penalty and records it in the breakdown.
fn apply_exclusion_penalty(score: &mut CandidateScore, penalty: f64) {
    score
        .breakdown
        .record(ScoreComponent::ExclusionPenalty, -penalty);
    score.total -= penalty;
    score.warnings.push(Warning::PreviouslySelected { penalty });
}

/// Sorts by score, highest first.
///
/// `sort_by` is stable, so `DiscoveryOrder` keeps roster order among equal
/// scores.
fn rank(candidates: &mut [Recommendation], tie_break: TieBreak) {
    candidates.sort_by(|a, b| {
        let by_score: Ordering = b.score.total_cmp(&a.score);
        match tie_break {
            TieBreak::DiscoveryOrder => by_score,
            TieBreak::LowestEmployeeId => by_score.then_with(|| a.employee_id.cmp(&b.employee_id)),
        }
    });
}
