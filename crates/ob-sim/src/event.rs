//! Run telemetry events.
//!
//! Events are appended by the simulator and never read back by the game;
//! they exist purely for post-run analysis.

use ob_core::Tick;
use serde::Serialize;

/// Where a score was earned, when the game reports it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ScoreEvent {
    pub points:   f64,
    pub position: Option<Position>,
    pub tick:     Tick,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GameOverEvent {
    /// Score at the moment the game ended.
    pub score: f64,
    pub tick:  Tick,
}

/// Game-defined telemetry recorded with [`Simulator::record`][crate::Simulator::record].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CustomEvent {
    pub kind:  String,
    pub value: f64,
    pub tick:  Tick,
}

/// One entry in a run's append-only event log.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SimEvent {
    Score(ScoreEvent),
    GameOver(GameOverEvent),
    Custom(CustomEvent),
}

impl SimEvent {
    pub fn tick(&self) -> Tick {
        match self {
            SimEvent::Score(e)    => e.tick,
            SimEvent::GameOver(e) => e.tick,
            SimEvent::Custom(e)   => e.tick,
        }
    }

    pub fn as_score(&self) -> Option<&ScoreEvent> {
        match self {
            SimEvent::Score(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_game_over(&self) -> Option<&GameOverEvent> {
        match self {
            SimEvent::GameOver(e) => Some(e),
            _ => None,
        }
    }
}
