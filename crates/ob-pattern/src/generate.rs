//! Player-archetype and monotonous pattern generators.
//!
//! Each generator is a free function with no shared state; randomness comes
//! only from the caller's `SimRng`, so a fixed seed yields a fixed pattern.
//!
//! | Archetype      | Shape                                                        |
//! |----------------|--------------------------------------------------------------|
//! | `Beginner`     | long variable waits, short variable holds, misses, double taps |
//! | `Expert`       | release ≈ 25 ± 3, hold ≈ 6 ± 1                              |
//! | `NoInput`      | one release spanning the whole duration                     |
//! | `HoldOnly`     | one hold spanning the whole duration                        |
//! | `RegularSpam`  | fixed hold/release pairs (mechanical masher)                |

use std::fmt;

use ob_core::SimRng;
use serde::{Deserialize, Serialize};

use crate::{ActionKind, InputAction, Pattern, PatternResult};

/// Default number of wait/press cycles for the skill archetypes.
pub const DEFAULT_CYCLES: usize = 20;

// Beginner timing, in ticks.
const BEGINNER_WAIT:        (u32, u32) = (60, 119);
const BEGINNER_HOLD:        (u32, u32) = (1, 15);
const BEGINNER_MISS_CHANCE: f64        = 0.35;
const BEGINNER_MISS_WAIT:   (u32, u32) = (30, 119);
const BEGINNER_TAP_CHANCE:  f64        = 0.25;
const BEGINNER_TAP_HOLD:    u32        = 2;
const BEGINNER_TAP_RELEASE: u32        = 3;

// Expert timing, in ticks.
const EXPERT_WAIT:           u32 = 25;
const EXPERT_WAIT_VARIATION: i64 = 3;
const EXPERT_HOLD:           u32 = 6;
const EXPERT_HOLD_VARIATION: i64 = 1;

// ── Archetype ─────────────────────────────────────────────────────────────────

/// The built-in pattern strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Beginner,
    Expert,
    NoInput,
    HoldOnly,
    RegularSpam,
}

impl Archetype {
    /// Report label, e.g. `"RegularSpam"`.
    pub fn name(self) -> &'static str {
        match self {
            Archetype::Beginner    => "Beginner",
            Archetype::Expert      => "Expert",
            Archetype::NoInput     => "NoInput",
            Archetype::HoldOnly    => "HoldOnly",
            Archetype::RegularSpam => "RegularSpam",
        }
    }

    /// `true` for the skill-free strategies used in vulnerability testing.
    pub fn is_monotonous(self) -> bool {
        matches!(self, Archetype::NoInput | Archetype::HoldOnly | Archetype::RegularSpam)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

/// An unskilled player: slow, inconsistent, sometimes missing an input
/// entirely and sometimes double-tapping by accident.
pub fn beginner(rng: &mut SimRng, cycles: usize) -> Pattern {
    let mut actions = Vec::with_capacity(cycles * 4);

    for _ in 0..cycles {
        let wait = rng.gen_range(BEGINNER_WAIT.0..=BEGINNER_WAIT.1);
        actions.push(InputAction::from_positive(ActionKind::Release, wait));

        let hold = rng.gen_range(BEGINNER_HOLD.0..=BEGINNER_HOLD.1);
        actions.push(InputAction::from_positive(ActionKind::Hold, hold));

        if rng.gen_bool(BEGINNER_MISS_CHANCE) {
            let missed = rng.gen_range(BEGINNER_MISS_WAIT.0..=BEGINNER_MISS_WAIT.1);
            actions.push(InputAction::from_positive(ActionKind::Release, missed));
        }

        if rng.gen_bool(BEGINNER_TAP_CHANCE) {
            actions.push(InputAction::from_positive(ActionKind::Hold, BEGINNER_TAP_HOLD));
            actions.push(InputAction::from_positive(ActionKind::Release, BEGINNER_TAP_RELEASE));
        }
    }

    Pattern::new(actions)
}

/// A near-optimal player with low-variance timing.
pub fn expert(rng: &mut SimRng, cycles: usize) -> Pattern {
    let mut actions = Vec::with_capacity(cycles * 2);

    for _ in 0..cycles {
        let wait = jitter(rng, EXPERT_WAIT, EXPERT_WAIT_VARIATION);
        actions.push(InputAction::from_positive(ActionKind::Release, wait));

        let hold = jitter(rng, EXPERT_HOLD, EXPERT_HOLD_VARIATION);
        actions.push(InputAction::from_positive(ActionKind::Hold, hold));
    }

    Pattern::new(actions)
}

/// Never press the button.
pub fn no_input(duration_ticks: u32) -> PatternResult<Pattern> {
    Ok(Pattern::new(vec![InputAction::release(duration_ticks)?]))
}

/// Hold the button for the whole duration.
pub fn hold_only(duration_ticks: u32) -> PatternResult<Pattern> {
    Ok(Pattern::new(vec![InputAction::hold(duration_ticks)?]))
}

/// Rhythmically perfect button mashing: `cycles` × (hold `press`, release
/// `release`).
pub fn regular_spam(press: u32, release: u32, cycles: usize) -> PatternResult<Pattern> {
    let hold = InputAction::hold(press)?;
    let rest = InputAction::release(release)?;
    Ok((0..cycles).flat_map(|_| [hold, rest]).collect())
}

/// `base ± variation`, never below one tick.
fn jitter(rng: &mut SimRng, base: u32, variation: i64) -> u32 {
    let offset = rng.random_int(-variation, variation);
    (base as i64 + offset).max(1) as u32
}
