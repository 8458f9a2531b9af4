//! The `ReportWriter` trait implemented by all report backends.

use ob_analyzer::{EvaluationReport, GameComparison};

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
pub trait ReportWriter {
    /// Write one game's evaluation.
    fn write_report(&mut self, report: &EvaluationReport) -> OutputResult<()>;

    /// Record the outcome of comparing the written reports.
    ///
    /// Backends with no place for it ignore it.
    fn write_comparison(&mut self, _comparison: &GameComparison) -> OutputResult<()> {
        Ok(())
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; later calls are no-ops.
    fn finish(&mut self) -> OutputResult<()>;
}
