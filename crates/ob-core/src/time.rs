//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one game
//! frame; at the default rate of 60 ticks per second:
//!
//!   seconds = ticks / ticks_per_second
//!
//! Difficulty is a pure function of the tick counter:
//!
//!   difficulty = 1 + floor(tick / difficulty_step_ticks)
//!
//! With the default step of 3 600 ticks the difficulty rises once per
//! simulated minute.

use std::fmt;

use crate::{ObError, ObResult};

/// Frames per simulated second.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// Ticks between difficulty increments (one simulated minute at 60 Hz).
pub const DEFAULT_DIFFICULTY_STEP_TICKS: u64 = 60 * 60;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, or `None` if `earlier` is
    /// later than `self`.
    #[inline]
    pub fn checked_since(self, earlier: Tick) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Simulator configuration.
///
/// Typically embedded in the application's TOML config; every field has a
/// default so a partial table only overrides what it names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Frames per simulated second.  Default: 60.
    pub ticks_per_second: u32,

    /// Ticks between difficulty increments.  Default: 3600.
    pub difficulty_step_ticks: u64,

    /// Master RNG seed.  Each run's RNG is derived from this seed and the
    /// run's index, so the same seed reproduces the same sequence of runs.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks_per_second:      DEFAULT_TICKS_PER_SECOND,
            difficulty_step_ticks: DEFAULT_DIFFICULTY_STEP_TICKS,
            seed:                  42,
        }
    }
}

impl SimConfig {
    /// Reject configurations that would divide by zero.
    pub fn validate(&self) -> ObResult<()> {
        if self.ticks_per_second == 0 {
            return Err(ObError::Config("ticks_per_second must be > 0".into()));
        }
        if self.difficulty_step_ticks == 0 {
            return Err(ObError::Config("difficulty_step_ticks must be > 0".into()));
        }
        Ok(())
    }

    /// Difficulty level in effect at `tick`.
    #[inline]
    pub fn difficulty_at(&self, tick: Tick) -> u32 {
        let step = self.difficulty_step_ticks.max(1);
        1 + (tick.0 / step) as u32
    }

    /// Convert a tick count to simulated seconds.
    #[inline]
    pub fn seconds(&self, ticks: u64) -> f64 {
        ticks as f64 / self.ticks_per_second.max(1) as f64
    }

    /// How many ticks span `secs` seconds (rounded to the nearest tick).
    #[inline]
    pub fn ticks_for_secs(&self, secs: f64) -> u64 {
        (secs * self.ticks_per_second as f64).round().max(0.0) as u64
    }
}
