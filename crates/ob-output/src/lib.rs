//! `ob-output` — report and trace output for the one-button analyzer.
//!
//! | Backend                | Files created                               |
//! |------------------------|---------------------------------------------|
//! | [`CsvReportWriter`]    | `evaluations.csv`, `pattern_results.csv`    |
//! | [`JsonReportWriter`]   | `evaluations.json`                          |
//! | [`TickTraceObserver`]  | any path; one row per simulated tick        |
//!
//! Report backends implement [`ReportWriter`].  [`render_report`] and
//! [`render_comparison`] produce the plain-text summaries printed by the
//! demo binary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ob_output::{CsvReportWriter, ReportWriter};
//!
//! let mut writer = CsvReportWriter::new(Path::new("./output"))?;
//! for report in &reports {
//!     writer.write_report(report)?;
//! }
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod text;
pub mod trace;
pub mod writer;


pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonReportWriter;
pub use row::{EvaluationRow, PatternGroup, PatternRow};
pub use text::{ComparisonText, ReportText, render_comparison, render_report};
pub use trace::TickTraceObserver;
pub use writer::ReportWriter;
