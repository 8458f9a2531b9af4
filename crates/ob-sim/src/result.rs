//! Outcome of one simulated run.

use serde::Serialize;

use crate::{GameOverEvent, ScoreEvent, SimEvent};

/// Why a run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// The game called `end()`.
    GameOver,
    /// `max_ticks` was reached without a game-over signal.
    TimedOut,
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunResult {
    pub score:            f64,
    /// Ticks simulated (the tick counter at termination).
    pub ticks:            u64,
    /// `ticks / ticks_per_second`.
    pub duration_seconds: f64,
    pub events:           Vec<SimEvent>,
    /// The run's game-over event, if the game ended itself.
    pub game_over:        Option<GameOverEvent>,
    pub outcome:          RunOutcome,
}

impl RunResult {
    /// Score events in the order they were recorded.
    pub fn score_events(&self) -> impl Iterator<Item = &ScoreEvent> + '_ {
        self.events.iter().filter_map(SimEvent::as_score)
    }
}
