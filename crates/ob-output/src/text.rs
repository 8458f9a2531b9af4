//! Human-readable rendering of reports and comparisons.

use std::fmt;

use ob_analyzer::{EvaluationReport, GameComparison};

/// `Display` adapter for one [`EvaluationReport`].
pub struct ReportText<'a>(pub &'a EvaluationReport);

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let e = &r.evaluation;

        writeln!(f, "===== Testing Game: {} =====", r.game_name)?;

        writeln!(f, "\nMonotonous Input Test:")?;
        writeln!(f, "Monotonous Pattern Vulnerability: {}", r.monotonous.vulnerability_level())?;
        for p in &r.monotonous.pattern_results {
            writeln!(f, "- {}: {:.1}s, Score: {}", p.pattern, p.survival_seconds, p.score)?;
        }

        writeln!(f, "\nPlayer Skill Test:")?;
        for a in [&r.players.beginner, &r.players.expert] {
            writeln!(f, "- {}: {:.1}s, Score: {:.1}", a.archetype, a.average_duration, a.average_score)?;
        }
        writeln!(f, "Skill Gap: {:.2}x", r.players.skill_gap)?;

        writeln!(f, "\nEvaluation Results:")?;
        writeln!(f, "- Overall Rating: {}/12 points ({})", e.total_score, e.rating)?;
        writeln!(f, "- Game Duration: {}/3 points", e.duration_score)?;
        writeln!(f, "- Skill Gap: {}/3 points", e.skill_gap_score)?;
        writeln!(f, "- Difficulty Progression: {}/3 points", e.difficulty_score)?;
        writeln!(f, "- Monotonous Input Resistance: {}/3 points", e.monotonous_input_score)?;

        writeln!(f, "\nStrengths:")?;
        for s in &e.strengths {
            writeln!(f, "- {s}")?;
        }

        writeln!(f, "\nWeaknesses:")?;
        for w in &e.weaknesses {
            writeln!(f, "- {w}")?;
        }

        writeln!(f, "\nImprovement Recommendations:")?;
        for (i, rec) in r.recommendations.iter().enumerate() {
            writeln!(f, "{}. {rec}", i + 1)?;
        }
        Ok(())
    }
}

/// `Display` adapter for the comparison table of several reports.
pub struct ComparisonText<'a> {
    pub reports:    &'a [EvaluationReport],
    pub comparison: &'a GameComparison,
}

impl fmt::Display for ComparisonText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Game Comparison =====")?;
        writeln!(f, "| Game Name | Rating | Score | Skill Gap | Avg Play Time | Monotonous Input |")?;
        writeln!(f, "|-----------|--------|-------|-----------|---------------|------------------|")?;

        for r in self.reports {
            let e = &r.evaluation;
            writeln!(
                f,
                "| {:<10} | {:<6} | {}/12 | {:.2}x | {:.1}s | {}/3 |",
                r.game_name,
                e.rating.label(),
                e.total_score,
                r.players.skill_gap,
                r.players.expert.average_duration,
                e.monotonous_input_score,
            )?;
        }

        writeln!(f, "\nBest Game Design: {}", self.comparison.best_game)?;
        writeln!(f, "Reasons:")?;
        for reason in &self.comparison.reasons {
            writeln!(f, "- {reason}")?;
        }
        Ok(())
    }
}

/// The multi-section text summary of one report.
pub fn render_report(report: &EvaluationReport) -> String {
    ReportText(report).to_string()
}

/// The markdown comparison table followed by the winner and its strengths.
pub fn render_comparison(reports: &[EvaluationReport], comparison: &GameComparison) -> String {
    ComparisonText { reports, comparison }.to_string()
}
