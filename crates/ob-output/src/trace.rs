//! `TickTraceObserver<W>` — per-tick CSV trace of a single run.
//!
//! Columns: `tick, pressed, just_pressed, just_released, score, difficulty,
//! events`, where `events` is the length of the event log at the end of the
//! tick.  Useful for eyeballing why a pattern survives or dies.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use ob_core::Tick;
use ob_sim::{RunObserver, RunResult, Simulator};
use tracing::warn;

use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that writes one CSV row per simulated tick.
///
/// Errors are stored internally because observer callbacks have no return
/// value.  After the run, check with [`take_error`][Self::take_error].
pub struct TickTraceObserver<W: Write> {
    writer:     Writer<W>,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl TickTraceObserver<File> {
    /// Trace into a new file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> TickTraceObserver<W> {
    /// Trace into any `Write` sink; writes the header row immediately.
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record([
            "tick",
            "pressed",
            "just_pressed",
            "just_released",
            "score",
            "difficulty",
            "events",
        ])?;
        Ok(Self { writer, rows: 0, last_error: None })
    }

    /// Number of tick rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush and unwrap the inner sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "tick trace write failed");
                self.last_error = Some(e);
            }
        }
    }

    fn write_tick(&mut self, tick: Tick, sim: &Simulator) -> OutputResult<()> {
        let input = sim.input();
        self.writer.write_record(&[
            tick.0.to_string(),
            (input.pressed as u8).to_string(),
            (input.just_pressed as u8).to_string(),
            (input.just_released as u8).to_string(),
            sim.score().to_string(),
            sim.difficulty().to_string(),
            sim.events().len().to_string(),
        ])?;
        self.rows += 1;
        Ok(())
    }
}

impl<W: Write> RunObserver for TickTraceObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, sim: &Simulator) {
        let result = self.write_tick(tick, sim);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _result: &RunResult) {
        let result = self.writer.flush().map_err(OutputError::from);
        self.store_err(result);
    }
}
