//! `ob-pattern` — synthetic one-button input.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`action`]    | `ActionKind`, `InputAction`, `Pattern`, `NamedPattern`       |
//! | [`cursor`]    | `PatternCursor` — explicit per-tick pattern playback state   |
//! | [`generate`]  | `Archetype` and the beginner/expert/monotonous generators    |
//! | [`loader`]    | `load_patterns_csv`, `load_patterns_reader`                  |
//! | [`error`]     | `PatternError`, `PatternResult<T>`                           |
//!
//! # Playback model (summary)
//!
//! A pattern is a list of `(kind, duration_ticks)` actions.  Each tick the
//! simulator steps a `PatternCursor`:
//!
//! ```text
//! if elapsed_in_action >= duration_ticks:
//!     advance to the next action, elapsed_in_action = 0
//!     pressed = next action is Hold   (unchanged past the end)
//! else:
//!     pressed = current action is Hold
//!     elapsed_in_action += 1
//! ```
//!
//! The advancing tick already plays the next action without counting toward
//! it, so every action after the first lasts one tick longer than its
//! `duration_ticks`.  Once every action has been consumed the cursor keeps
//! reporting the last pressed state for the rest of the run.

pub mod action;
pub mod cursor;
pub mod error;
pub mod generate;
pub mod loader;

#[cfg(test)]
mod tests;

pub use action::{ActionKind, InputAction, NamedPattern, Pattern};
pub use cursor::PatternCursor;
pub use error::{PatternError, PatternResult};
pub use generate::{
    Archetype, DEFAULT_CYCLES, beginner, expert, hold_only, no_input, regular_spam,
};
pub use loader::{load_patterns_csv, load_patterns_reader};
