//! Run observer trait for per-tick tracing and data collection.

use ob_core::Tick;

use crate::{RunResult, Simulator};

/// Callbacks invoked by [`Simulator::simulate_game_observed`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait RunObserver {
    /// Called after the game's update for `tick` and the tick advance.
    ///
    /// `sim` reflects the state at the end of that tick.
    fn on_tick_end(&mut self, _tick: Tick, _sim: &Simulator) {}

    /// Called once after the run terminates.
    fn on_run_end(&mut self, _result: &RunResult) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
