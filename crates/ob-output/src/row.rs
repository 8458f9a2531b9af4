//! Flat row types written by the CSV backend.

use ob_analyzer::EvaluationReport;

/// One game's rubric summary.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRow {
    pub game_name:              String,
    pub rating:                 &'static str,
    pub total_score:            i32,
    pub duration_score:         i32,
    pub skill_gap_score:        i32,
    pub difficulty_score:       i32,
    pub monotonous_input_score: i32,
    pub skill_gap:              f64,
    pub expert_avg_seconds:     f64,
    pub beginner_avg_seconds:   f64,
    pub vulnerability:          &'static str,
}

impl EvaluationRow {
    pub fn from_report(report: &EvaluationReport) -> Self {
        let e = &report.evaluation;
        Self {
            game_name:              report.game_name.clone(),
            rating:                 e.rating.label(),
            total_score:            e.total_score,
            duration_score:         e.duration_score,
            skill_gap_score:        e.skill_gap_score,
            difficulty_score:       e.difficulty_score,
            monotonous_input_score: e.monotonous_input_score,
            skill_gap:              report.players.skill_gap,
            expert_avg_seconds:     report.players.expert.average_duration,
            beginner_avg_seconds:   report.players.beginner.average_duration,
            vulnerability:          report.monotonous.vulnerability_level(),
        }
    }
}

/// Which test a [`PatternRow`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternGroup {
    Monotonous,
    Player,
}

impl PatternGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternGroup::Monotonous => "monotonous",
            PatternGroup::Player     => "player",
        }
    }
}

/// One pattern's result for one game.  Player rows carry run averages.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow {
    pub game_name:        String,
    pub group:            PatternGroup,
    pub pattern:          String,
    pub runs:             u32,
    pub score:            f64,
    pub survival_seconds: f64,
    /// Only meaningful for monotonous rows.
    pub is_vulnerable:    bool,
}

impl PatternRow {
    /// Monotonous rows in test order, then Beginner and Expert.
    pub fn from_report(report: &EvaluationReport) -> Vec<Self> {
        let monotonous = report.monotonous.pattern_results.iter().map(|r| PatternRow {
            game_name:        report.game_name.clone(),
            group:            PatternGroup::Monotonous,
            pattern:          r.pattern.clone(),
            runs:             1,
            score:            r.score,
            survival_seconds: r.survival_seconds,
            is_vulnerable:    r.is_vulnerable,
        });

        let players = [&report.players.beginner, &report.players.expert].into_iter().map(|a| {
            PatternRow {
                game_name:        report.game_name.clone(),
                group:            PatternGroup::Player,
                pattern:          a.archetype.name().to_owned(),
                runs:             a.runs,
                score:            a.average_score,
                survival_seconds: a.average_duration,
                is_vulnerable:    false,
            }
        });

        monotonous.chain(players).collect()
    }
}
