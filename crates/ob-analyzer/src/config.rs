//! Analysis thresholds and run budgets.

use ob_core::DEFAULT_TICKS_PER_SECOND;
use serde::{Deserialize, Serialize};

use crate::{AnalyzerError, AnalyzerResult};

/// Every constant the analyzer uses.
///
/// Tick-denominated values are calibrated for 60 ticks per second; use
/// [`AnalyzerConfig::for_tick_rate`] when simulating at another rate.
/// Second-denominated thresholds are rate independent.
///
/// Loaded from the `[analyzer]` table of a TOML file; missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Tick budget for every analysis run.
    pub max_ticks: u64,
    /// Length of the NoInput and HoldOnly patterns, in ticks.
    pub monotonous_duration_ticks: u32,
    /// RegularSpam press length, in ticks.
    pub spam_press_ticks: u32,
    /// RegularSpam release length, in ticks.
    pub spam_release_ticks: u32,
    /// RegularSpam repetitions.
    pub spam_cycles: usize,
    /// Runs per player archetype; scores and durations are averaged.
    pub player_runs: u32,
    /// Wait/press cycles in the generated Beginner and Expert patterns.
    pub pattern_cycles: usize,
    /// Seed for Beginner/Expert pattern generation.
    pub pattern_seed: u64,
    /// A monotonous pattern surviving longer than this is a vulnerability.
    pub vulnerable_above_secs: f64,
    /// A monotonous pattern dying sooner than this is a vulnerability.
    pub vulnerable_below_secs: f64,
    /// Expert-duration cut points for duration scores 3, 2, 1, 0, -1, -2.
    pub duration_thresholds_secs: [f64; 6],
    /// Skill-gap cut points for skill-gap scores 3, 2, 1.
    pub skill_gap_thresholds: [f64; 3],
    /// Beginners should survive at least this long.
    pub beginner_min_secs: f64,
    /// Expert/beginner score-per-second ratio worth a difficulty point.
    pub progression_ratio: f64,
    /// Expert score consistency worth a difficulty point.
    pub consistency_threshold: f64,
    /// Minimum expert score events before consistency is measured.
    pub min_consistency_events: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_ticks:                 3600,
            monotonous_duration_ticks: 600,
            spam_press_ticks:          3,
            spam_release_ticks:        3,
            spam_cycles:               100,
            player_runs:               3,
            pattern_cycles:            ob_pattern::DEFAULT_CYCLES,
            pattern_seed:              7,
            vulnerable_above_secs:     10.0,
            vulnerable_below_secs:     1.0,
            duration_thresholds_secs:  [30.0, 20.0, 15.0, 10.0, 5.0, 2.0],
            skill_gap_thresholds:      [3.0, 2.0, 1.5],
            beginner_min_secs:         8.0,
            progression_ratio:         1.5,
            consistency_threshold:     0.7,
            min_consistency_events:    5,
        }
    }
}

impl AnalyzerConfig {
    /// Defaults with tick-denominated values rescaled from 60 ticks per
    /// second to `ticks_per_second`.
    pub fn for_tick_rate(ticks_per_second: u32) -> Self {
        let base = Self::default();
        let factor = ticks_per_second as f64 / DEFAULT_TICKS_PER_SECOND as f64;
        let scale = |ticks: u64| ((ticks as f64 * factor).round() as u64).max(1);

        Self {
            max_ticks:                 scale(base.max_ticks),
            monotonous_duration_ticks: scale(base.monotonous_duration_ticks as u64) as u32,
            spam_press_ticks:          scale(base.spam_press_ticks as u64) as u32,
            spam_release_ticks:        scale(base.spam_release_ticks as u64) as u32,
            ..base
        }
    }

    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.max_ticks == 0 {
            return Err(AnalyzerError::Config("max_ticks must be > 0".into()));
        }
        if self.player_runs == 0 {
            return Err(AnalyzerError::Config("player_runs must be > 0".into()));
        }
        if self.vulnerable_below_secs > self.vulnerable_above_secs {
            return Err(AnalyzerError::Config(
                "vulnerable_below_secs must not exceed vulnerable_above_secs".into(),
            ));
        }
        if !is_descending(&self.duration_thresholds_secs) {
            return Err(AnalyzerError::Config(
                "duration_thresholds_secs must be in descending order".into(),
            ));
        }
        if !is_descending(&self.skill_gap_thresholds) {
            return Err(AnalyzerError::Config(
                "skill_gap_thresholds must be in descending order".into(),
            ));
        }
        Ok(())
    }
}

fn is_descending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] >= w[1])
}
