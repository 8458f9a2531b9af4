//! Headless ports of three one-button arcade games.
//!
//! All games play on the normalised 100 × 100 field used by the
//! `ob_core::geom` helpers, with y growing downwards.

mod burger_stack;
mod lava_surfing;
mod orbit_jumper;

pub use burger_stack::BurgerStack;
pub use lava_surfing::LavaSurfing;
pub use orbit_jumper::OrbitJumper;

use ob_sim::Simulator;
use tracing::warn;

/// Register an entity pool; the simulator's pool map is empty after
/// `init_game`, so this only fails if a game registers a name twice with
/// different types.
fn register<T: 'static>(sim: &mut Simulator, name: &str) {
    if let Err(e) = sim.objects.register::<T>(name) {
        warn!(error = %e, "pool registration failed");
    }
}

/// Append `entity` to the pool `name`, if it is registered with type `T`.
fn spawn<T: 'static>(sim: &mut Simulator, name: &str, entity: T) {
    if let Some(pool) = sim.objects.pool_mut::<T>(name) {
        pool.add(entity);
    }
}
