// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tunable recommender settings.
//!
//! Every field has a default, so a configuration file only needs to list
//! the values it overrides.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Weights applied to each soft-constraint component.
///
/// Each component's raw value lies in 0.0..=1.0 and is multiplied by its
/// weight, so with the defaults a perfect candidate scores 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Sport expertise.
    pub expertise: f64,
    /// Normalized performance rating.
    pub performance: f64,
    /// Remaining weekly capacity.
    pub hour_balance: f64,
    /// Preferred availability match.
    pub preference: f64,
    /// Prior assignment count.
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            expertise: 30.0,
            performance: 20.0,
            hour_balance: 25.0,
            preference: 15.0,
            experience: 10.0,
        }
    }
}

impl ScoringWeights {
    /// Returns the maximum attainable score.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.expertise + self.performance + self.hour_balance + self.preference + self.experience
    }

    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("expertise", self.expertise),
            ("performance", self.performance),
            ("hour_balance", self.hour_balance),
            ("preference", self.preference),
            ("experience", self.experience),
        ]
    }
}

/// How candidates with identical scores are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TieBreak {
    /// Keep roster order (stable sort).
    #[default]
    DiscoveryOrder,
    /// The lower employee identifier wins.
    LowestEmployeeId,
}

/// Settings for the recommendation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Soft-constraint weights.
    pub weights: ScoringWeights,
    /// Subtracted from a candidate already chosen as Option A earlier in
    /// the same game.
    pub exclusion_penalty: f64,
    /// Current/maximum weekly hours ratio at which a near-limit warning
    /// is attached.
    pub near_limit_ratio: f64,
    /// Score pinned on candidates with violations.
    pub violation_score: f64,
    /// Treat an employee with no availability entries for the game's
    /// season as available.
    pub permissive_missing_availability: bool,
    /// Ordering of equal scores.
    pub tie_break: TieBreak,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            exclusion_penalty: 50.0,
            near_limit_ratio: 0.85,
            violation_score: -1000.0,
            permissive_missing_availability: true,
            tie_break: TieBreak::default(),
        }
    }
}

impl RecommenderConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ConfigParse` if the text is not valid JSON for
    /// this structure, or `CoreError::InvalidConfig` if a value is out of range.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if:
    /// - A weight is negative or not finite
    /// - The exclusion penalty is negative or not finite
    /// - The near-limit ratio is outside (0, 1]
    /// - The violation score is not finite
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, weight) in self.weights.entries() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(CoreError::InvalidConfig {
                    reason: format!("weight '{name}' must be a non-negative number, got {weight}"),
                });
            }
        }

        if !self.exclusion_penalty.is_finite() || self.exclusion_penalty < 0.0 {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "exclusion_penalty must be a non-negative number, got {}",
                    self.exclusion_penalty
                ),
            });
        }

        if !(self.near_limit_ratio > 0.0 && self.near_limit_ratio <= 1.0) {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "near_limit_ratio must be in (0, 1], got {}",
                    self.near_limit_ratio
                ),
            });
        }

        if !self.violation_score.is_finite() {
            return Err(CoreError::InvalidConfig {
                reason: String::from("violation_score must be finite"),
            });
        }

        Ok(())
    }
}
