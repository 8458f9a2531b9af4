//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `evaluations.csv`      one row per game
//! - `pattern_results.csv`  one row per tested pattern per game

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ob_analyzer::EvaluationReport;

use crate::row::{EvaluationRow, PatternRow};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes evaluation reports to two CSV files.
pub struct CsvReportWriter {
    evaluations: Writer<File>,
    patterns:    Writer<File>,
    finished:    bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut evaluations = Writer::from_path(dir.join("evaluations.csv"))?;
        evaluations.write_record([
            "game_name",
            "rating",
            "total_score",
            "duration_score",
            "skill_gap_score",
            "difficulty_score",
            "monotonous_input_score",
            "skill_gap",
            "expert_avg_seconds",
            "beginner_avg_seconds",
            "vulnerability",
        ])?;

        let mut patterns = Writer::from_path(dir.join("pattern_results.csv"))?;
        patterns.write_record([
            "game_name",
            "group",
            "pattern",
            "runs",
            "score",
            "survival_seconds",
            "is_vulnerable",
        ])?;

        Ok(Self { evaluations, patterns, finished: false })
    }

    fn write_evaluation(&mut self, row: &EvaluationRow) -> OutputResult<()> {
        self.evaluations.write_record(&[
            row.game_name.clone(),
            row.rating.to_owned(),
            row.total_score.to_string(),
            row.duration_score.to_string(),
            row.skill_gap_score.to_string(),
            row.difficulty_score.to_string(),
            row.monotonous_input_score.to_string(),
            format!("{:.3}", row.skill_gap),
            format!("{:.3}", row.expert_avg_seconds),
            format!("{:.3}", row.beginner_avg_seconds),
            row.vulnerability.to_owned(),
        ])?;
        Ok(())
    }

    fn write_patterns(&mut self, rows: &[PatternRow]) -> OutputResult<()> {
        for row in rows {
            self.patterns.write_record(&[
                row.game_name.clone(),
                row.group.as_str().to_owned(),
                row.pattern.clone(),
                row.runs.to_string(),
                format!("{:.3}", row.score),
                format!("{:.3}", row.survival_seconds),
                (row.is_vulnerable as u8).to_string(),
            ])?;
        }
        Ok(())
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_report(&mut self, report: &EvaluationReport) -> OutputResult<()> {
        self.write_evaluation(&EvaluationRow::from_report(report))?;
        self.write_patterns(&PatternRow::from_report(report))
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.evaluations.flush()?;
        self.patterns.flush()?;
        Ok(())
    }
}
