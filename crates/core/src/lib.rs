// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift recommendation engine.
//!
//! The engine is synchronous and holds no state between calls. Callers
//! resolve all data up front into a `SchedulingData` snapshot, run
//! `process_cycle` (or `recommend_for_shift` for a single shift), and
//! persist the returned transitions themselves.

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

mod apply;
mod batch;
mod command;
mod config;
mod constraints;
mod error;
mod recommend;
mod scoring;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_transitions};
pub use batch::{CycleReport, EventFailure, ShiftTransition, process_cycle};
pub use command::ShiftCommand;
pub use config::{RecommenderConfig, ScoringWeights, TieBreak};
pub use constraints::{Violation, validate_candidate};
pub use error::CoreError;
pub use recommend::{
    EmptyReason, MAX_OPTIONS, Recommendation, ShiftRecommendation, recommend_for_shift,
};
pub use scoring::{
    CandidateScore, EXPERIENCE_FLOOR, EXPERIENCE_SATURATION, NEUTRAL_PREFERENCE, ScoreBreakdown,
    ScoreComponent, Warning, experience_factor, expertise_factor, hour_balance_factor,
    performance_factor, preference_factor, score_candidate,
};
pub use snapshot::{CandidateContext, SchedulingData, SchedulingDataBuilder};
