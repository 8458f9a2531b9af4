//! Plain-data result types produced by the analyzer.
//!
//! Every type here is built once and never mutated afterwards; they derive
//! `Serialize` so reports can be written straight to JSON or CSV.

use std::fmt;

use ob_pattern::Archetype;
use ob_sim::ScoreEvent;
use serde::Serialize;

// ── Monotonous input ──────────────────────────────────────────────────────────

/// One monotonous pattern's single run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatternResult {
    pub pattern:          String,
    pub survival_seconds: f64,
    pub score:            f64,
    pub ticks:            u64,
    pub is_vulnerable:    bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonotonousResults {
    /// In test order: NoInput, HoldOnly, RegularSpam, then extras.
    pub pattern_results:          Vec<PatternResult>,
    pub vulnerable_patterns:      Vec<String>,
    /// Two or more patterns are vulnerable.
    pub is_highly_vulnerable:     bool,
    /// At least one pattern is vulnerable.
    pub is_moderately_vulnerable: bool,
    /// 0 (high), 1 (moderate) or 3 (none).
    pub vulnerability_score:      i32,
}

impl MonotonousResults {
    pub(crate) fn from_results(pattern_results: Vec<PatternResult>) -> Self {
        let vulnerable_patterns: Vec<String> = pattern_results
            .iter()
            .filter(|r| r.is_vulnerable)
            .map(|r| r.pattern.clone())
            .collect();
        let is_highly_vulnerable = vulnerable_patterns.len() >= 2;
        let is_moderately_vulnerable = !vulnerable_patterns.is_empty();
        let vulnerability_score = if is_highly_vulnerable {
            0
        } else if is_moderately_vulnerable {
            1
        } else {
            3
        };
        Self {
            pattern_results,
            vulnerable_patterns,
            is_highly_vulnerable,
            is_moderately_vulnerable,
            vulnerability_score,
        }
    }

    /// `"High"`, `"Moderate"` or `"Low"`.
    pub fn vulnerability_level(&self) -> &'static str {
        if self.is_highly_vulnerable {
            "High"
        } else if self.is_moderately_vulnerable {
            "Moderate"
        } else {
            "Low"
        }
    }
}

// ── Player archetypes ─────────────────────────────────────────────────────────

/// Averages over the repeated runs of one archetype.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArchetypeResult {
    pub archetype:        Archetype,
    pub runs:             u32,
    pub average_score:    f64,
    pub average_duration: f64,
    /// Score events of all runs, concatenated in run order.
    #[serde(skip_serializing)]
    pub score_events:     Vec<ScoreEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerResults {
    pub beginner:  ArchetypeResult,
    pub expert:    ArchetypeResult,
    /// `expert.average_score / max(1, beginner.average_score)`.
    pub skill_gap: f64,
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Overall verdict derived from the 0..=12 total.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Rating {
    #[serde(rename = "OUTSTANDING")]
    Outstanding,
    #[serde(rename = "EXCELLENT")]
    Excellent,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "AVERAGE")]
    Average,
    #[serde(rename = "NEEDS IMPROVEMENT")]
    NeedsImprovement,
}

impl Rating {
    pub fn from_total(total: i32) -> Self {
        match total {
            t if t >= 10 => Rating::Outstanding,
            t if t >= 8  => Rating::Excellent,
            t if t >= 6  => Rating::Good,
            t if t >= 3  => Rating::Average,
            _            => Rating::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Outstanding      => "OUTSTANDING",
            Rating::Excellent        => "EXCELLENT",
            Rating::Good             => "GOOD",
            Rating::Average          => "AVERAGE",
            Rating::NeedsImprovement => "NEEDS IMPROVEMENT",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rubric scores with the derived strengths and weaknesses.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    /// -3..=3 from the expert's average duration.
    pub duration_score:         i32,
    /// 0..=3 from the skill gap.
    pub skill_gap_score:        i32,
    /// 0..=3: beginner survival, score progression, score consistency.
    pub difficulty_score:       i32,
    /// The monotonous vulnerability score.
    pub monotonous_input_score: i32,
    /// `max(0, duration) + skill_gap + difficulty + monotonous`, 0..=12.
    pub total_score:            i32,
    pub rating:                 Rating,
    /// Expert/beginner score-per-second ratio behind the difficulty score.
    pub progression_ratio:      f64,
    /// Expert score consistency behind the difficulty score.
    pub score_consistency:      f64,
    pub strengths:              Vec<String>,
    pub weaknesses:             Vec<String>,
}

/// Everything known about one game after a comprehensive evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub game_name:       String,
    pub monotonous:      MonotonousResults,
    pub players:         PlayerResults,
    pub evaluation:      Evaluation,
    pub recommendations: Vec<String>,
}

/// Result of ranking several reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameComparison {
    /// Index into the compared slice.
    pub best_index: usize,
    pub best_game:  String,
    /// The winner's strengths.
    pub reasons:    Vec<String>,
}
