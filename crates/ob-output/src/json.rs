//! JSON report backend.
//!
//! Buffers every report and writes a single `evaluations.json` document on
//! [`finish`][ReportWriter::finish]:
//!
//! ```json
//! { "reports": [ … ], "comparison": { … } | null }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ob_analyzer::{EvaluationReport, GameComparison};
use serde::Serialize;

use crate::writer::ReportWriter;
use crate::OutputResult;

#[derive(Serialize)]
struct Document<'a> {
    reports:    &'a [EvaluationReport],
    comparison: Option<&'a GameComparison>,
}

/// Writes all reports as one pretty-printed JSON document.
pub struct JsonReportWriter {
    path:       PathBuf,
    reports:    Vec<EvaluationReport>,
    comparison: Option<GameComparison>,
    finished:   bool,
}

impl JsonReportWriter {
    /// Target `dir/evaluations.json`.  The file is created by `finish`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path:       dir.join("evaluations.json"),
            reports:    Vec::new(),
            comparison: None,
            finished:   false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_report(&mut self, report: &EvaluationReport) -> OutputResult<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &GameComparison) -> OutputResult<()> {
        self.comparison = Some(comparison.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let doc = Document { reports: &self.reports, comparison: self.comparison.as_ref() };
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &doc)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
