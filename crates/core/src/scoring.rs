// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Soft-constraint scoring for candidates that passed validation.
//!
//! A score is the sum of five weighted components. Each component produces
//! a raw factor in 0.0..=1.0 which is multiplied by its weight from
//! `ScoringWeights` and recorded in a `ScoreBreakdown`.

use crate::config::RecommenderConfig;
use crate::snapshot::CandidateContext;
use serde::Serialize;
use shiftwise_domain::{ExpertiseLevel, Game, MAX_PERFORMANCE_RATING, SeasonalAvailability};
use std::collections::BTreeMap;

/// Assignment count at which the experience factor saturates.
pub const EXPERIENCE_SATURATION: usize = 10;

/// Experience factor for an employee with no prior assignments.
pub const EXPERIENCE_FLOOR: f64 = 0.3;

/// Preference factor when no preferred window matches.
pub const NEUTRAL_PREFERENCE: f64 = 0.5;

/// A named contribution to a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponent {
    /// Sport expertise.
    Expertise,
    /// Performance rating.
    Performance,
    /// Remaining weekly capacity.
    HourBalance,
    /// Preferred availability match.
    Preference,
    /// Prior assignments.
    Experience,
    /// Deduction for being Option A on an earlier shift of the same game.
    ExclusionPenalty,
}

/// Weighted contributions, keyed by component.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreBreakdown(BTreeMap<ScoreComponent, f64>);

impl ScoreBreakdown {
    /// Records a contribution, replacing any previous value.
    pub fn record(&mut self, component: ScoreComponent, contribution: f64) {
        self.0.insert(component, contribution);
    }

    /// Returns a component's contribution, if recorded.
    #[must_use]
    pub fn get(&self, component: ScoreComponent) -> Option<f64> {
        self.0.get(&component).copied()
    }

    /// Returns the sum of all contributions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Iterates over the recorded contributions in component order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreComponent, f64)> + '_ {
        self.0.iter().map(|(component, value)| (*component, *value))
    }
}

/// A non-blocking note attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The employee is close to their weekly ceiling.
    NearWeeklyLimit {
        /// Hours already scheduled this week.
        current_hours: f64,
        /// The weekly ceiling.
        max_hours: f64,
    },
    /// The employee is already Option A for an earlier position in this game.
    PreviouslySelected {
        /// The penalty that was subtracted.
        penalty: f64,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NearWeeklyLimit {
                current_hours,
                max_hours,
            } => {
                let percent: f64 = current_hours / max_hours * 100.0;
                write!(
                    f,
                    "near weekly limit: {percent:.0}% used ({current_hours:.1}/{max_hours:.1} hours)"
                )
            }
            Self::PreviouslySelected { penalty } => write!(
                f,
                "already first choice for an earlier position in this game (-{penalty:.0})"
            ),
        }
    }
}

/// The outcome of scoring one eligible candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScore {
    /// Sum of the breakdown.
    pub total: f64,
    /// Weighted contributions.
    pub breakdown: ScoreBreakdown,
    /// Non-blocking notes.
    pub warnings: Vec<Warning>,
}

/// Scores a candidate that has already passed `validate_candidate`.
///
/// # Arguments
///
/// * `game` - The game being staffed
/// * `candidate` - The candidate and their per-employee records
/// * `config` - Weights and the near-limit threshold
#[must_use]
pub fn score_candidate(
    game: &Game,
    candidate: &CandidateContext<'_>,
    config: &RecommenderConfig,
) -> CandidateScore {
    let weights = &config.weights;
    let employee = candidate.employee;
    let current_hours: Option<f64> = candidate.weekly_hours.map(|record| record.total_hours);

    let factors: [(ScoreComponent, f64, f64); 5] = [
        (
            ScoreComponent::Expertise,
            expertise_factor(employee.expertise_in(&game.sport)),
            weights.expertise,
        ),
        (
            ScoreComponent::Performance,
            performance_factor(employee.performance_rating),
            weights.performance,
        ),
        (
            ScoreComponent::HourBalance,
            hour_balance_factor(current_hours, employee.max_hours()),
            weights.hour_balance,
        ),
        (
            ScoreComponent::Preference,
            preference_factor(game, candidate.availability),
            weights.preference,
        ),
        (
            ScoreComponent::Experience,
            experience_factor(candidate.assigned_games.len()),
            weights.experience,
        ),
    ];

    let mut breakdown: ScoreBreakdown = ScoreBreakdown::default();
    for (component, factor, weight) in factors {
        breakdown.record(component, factor * weight);
    }

    let mut warnings: Vec<Warning> = Vec::new();
    let current: f64 = candidate.current_weekly_hours();
    if current / employee.max_hours() >= config.near_limit_ratio {
        warnings.push(Warning::NearWeeklyLimit {
            current_hours: current,
            max_hours: employee.max_hours(),
        });
    }

    CandidateScore {
        total: breakdown.total(),
        breakdown,
        warnings,
    }
}

/// Raw expertise factor: 1.0 expert, 0.7 intermediate, 0.4 beginner, 0.0 none.
#[must_use]
pub const fn expertise_factor(level: Option<ExpertiseLevel>) -> f64 {
    match level {
        Some(ExpertiseLevel::Expert) => 1.0,
        Some(ExpertiseLevel::Intermediate) => 0.7,
        Some(ExpertiseLevel::Beginner) => 0.4,
        None => 0.0,
    }
}

/// Raw performance factor: the rating scaled onto 0.0..=1.0.
#[must_use]
pub fn performance_factor(rating: f64) -> f64 {
    (rating / MAX_PERFORMANCE_RATING).clamp(0.0, 1.0)
}

/// Raw hour-balance factor: the unused share of the weekly ceiling.
///
/// An employee without a weekly-hours record is fully available.
#[must_use]
pub fn hour_balance_factor(current_hours: Option<f64>, max_hours: f64) -> f64 {
    current_hours.map_or(1.0, |current| (1.0 - current / max_hours).max(0.0))
}

/// Raw preference factor.
///
/// 1.0 when a preferred window for the game's season, year and weekday
/// overlaps the game; 0.5 otherwise, including when there is no
/// availability data at all.
#[must_use]
pub fn preference_factor(game: &Game, availability: &[SeasonalAvailability]) -> f64 {
    let preferred: bool = availability.iter().any(|entry| {
        entry.preferred
            && entry.applies_to(game.season(), game.year())
            && entry.matches(game.weekday(), &game.window)
    });

    if preferred { 1.0 } else { NEUTRAL_PREFERENCE }
}

/// Raw experience factor: 0.3 with no prior games, rising linearly to 1.0
/// at `EXPERIENCE_SATURATION` games.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn experience_factor(prior_assignments: usize) -> f64 {
    let capped: f64 = prior_assignments.min(EXPERIENCE_SATURATION) as f64;
    (1.0 - EXPERIENCE_FLOOR).mul_add(capped / EXPERIENCE_SATURATION as f64, EXPERIENCE_FLOOR)
}
