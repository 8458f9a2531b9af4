//! `ob-sim` — headless simulator for one-button games.
//!
//! # Run loop
//!
//! ```text
//! while !game_over && tick < max_ticks:
//!   ① Pattern   — step the PatternCursor → pressed for this tick
//!   ② Input     — update_input(pressed): edge detection against last tick
//!   ③ Update    — GameAdapter::update(sim, ctx), exactly once
//!   ④ Advance   — tick += 1; difficulty = 1 + tick / difficulty_step_ticks
//! ```
//!
//! A run ends either because the game called [`Simulator::end`]
//! ([`RunOutcome::GameOver`]) or because the tick budget ran out
//! ([`RunOutcome::TimedOut`]).  There is no other way out: a game that never
//! ends is bounded by `max_ticks`.
//!
//! # Quick-start
//!
//! ```rust
//! use ob_pattern::hold_only;
//! use ob_sim::{FnGame, Simulator};
//!
//! let game = FnGame::new(
//!     "hold-to-score",
//!     |_sim: &mut Simulator| (),
//!     |sim: &mut Simulator, _ctx: &mut ()| {
//!         if sim.input().pressed {
//!             sim.add_score(1.0);
//!         }
//!     },
//! );
//!
//! let mut sim = Simulator::default();
//! let result = sim.run_fresh(&game, 100, &hold_only(600).unwrap());
//! assert_eq!(result.ticks, 100);
//! assert_eq!(result.score, 100.0);
//! ```

pub mod adapter;
pub mod error;
pub mod event;
pub mod input;
pub mod observer;
pub mod result;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use adapter::{FnGame, GameAdapter};
pub use error::{SimError, SimResult};
pub use event::{CustomEvent, GameOverEvent, Position, ScoreEvent, SimEvent};
pub use input::InputState;
pub use observer::{NoopObserver, RunObserver};
pub use result::{RunOutcome, RunResult};
pub use simulator::Simulator;
