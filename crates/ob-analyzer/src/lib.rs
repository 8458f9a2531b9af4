//! `ob-analyzer` — scores one-button game designs from simulated play.
//!
//! # Pipeline
//!
//! ```text
//! test_monotonous_patterns ─┐
//!                           ├─► evaluate_game ─► generate_recommendations ─► EvaluationReport
//! compare_player_patterns ──┘
//!
//! [EvaluationReport, …] ─► compare_games ─► GameComparison
//! ```
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`analyzer`] | `GameAnalyzer`: runs the game through every analysis pattern  |
//! | [`rubric`]   | Pure scoring: sub-scores, strengths, advice, comparison       |
//! | [`report`]   | Result types (`EvaluationReport`, `Rating`, …)                |
//! | [`config`]   | `AnalyzerConfig` thresholds and budgets                       |
//!
//! # Rubric
//!
//! | Sub-score   | Range  | Measured from                                          |
//! |-------------|--------|--------------------------------------------------------|
//! | Duration    | -3..=3 | Expert average survival (30/20/15/10/5/2 s cut points) |
//! | Skill gap   | 0..=3  | Expert / beginner average score (3.0/2.0/1.5)          |
//! | Difficulty  | 0..=3  | Beginner ≥ 8 s, score-rate ratio ≥ 1.5, consistency ≥ 0.7 |
//! | Monotonous  | 0/1/3  | How many skill-free patterns survive > 10 s or < 1 s   |
//!
//! The total clamps a negative duration score to zero, giving 0..=12.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod report;
pub mod rubric;

#[cfg(test)]
mod tests;

pub use analyzer::GameAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalyzerError, AnalyzerResult};
pub use report::{
    ArchetypeResult, Evaluation, EvaluationReport, GameComparison, MonotonousResults,
    PatternResult, PlayerResults, Rating,
};
pub use rubric::{
    compare_games, evaluate_game, generate_recommendations, score_consistency, skill_gap,
};
