//! Seeded RNG shared by the simulator, the pattern generators and games.
//!
//! Nothing in the framework touches a global or OS-seeded generator.  The
//! simulator derives a fresh `SimRng` for every run with [`SimRng::child`],
//! keyed by the run index:
//!
//!   run_seed = draw(SmallRng(seed)) XOR (run_index * GOLDEN_GAMMA)
//!
//! so two simulators built from the same seed replay the same runs in the
//! same order, while consecutive runs still see different streams.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio increment used to spread child offsets over the seed space.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// A small, fast, reproducible RNG.
///
/// Games reach it as `sim.rng` during `init` and `update`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent generator for sub-stream `offset`.
    ///
    /// Advances `self` by one draw.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let base = self.0.r#gen::<u64>();
        Self::new(base ^ offset.wrapping_mul(GOLDEN_GAMMA))
    }

    /// One value from the standard distribution of `T`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform sample from `range`; panics on an empty range like
    /// [`rand::Rng::gen_range`].
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Bernoulli trial; `p` outside [0, 1] is clamped rather than rejected,
    /// so spawn chances scaled by difficulty may exceed 1.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    // ── Game helpers ──────────────────────────────────────────────────────

    /// Uniform float in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.0.r#gen::<f64>() * (max - min)
    }

    /// Uniform integer in `[min, max]` (both inclusive).
    ///
    /// Returns `min` when `max < min`.
    #[inline]
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}
