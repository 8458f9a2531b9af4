//! The `GameAdapter` trait — the extension point a game implements to be
//! analysed.

use std::marker::PhantomData;

use crate::Simulator;

/// A headless one-button game.
///
/// `init` registers the game's pools on the simulator and returns the game's
/// own per-run state as `Context` (player position, spawn timers, …).  The
/// simulator never inspects the context; it only hands it back to `update`.
/// Because a fresh context is built by every `init`, nothing a game stores
/// there can leak from one run into the next.
///
/// `update` runs exactly once per tick.  It reads
/// [`Simulator::input`], [`Simulator::difficulty`] and [`Simulator::tick`],
/// mutates pools, score and context, and calls [`Simulator::end`] when its
/// lose condition is met.  It must not render, load assets, or sleep.
///
/// # Example
///
/// ```rust,ignore
/// struct Dodge;
///
/// impl GameAdapter for Dodge {
///     type Context = f64; // player y
///
///     fn name(&self) -> &str { "dodge" }
///
///     fn init(&self, sim: &mut Simulator) -> f64 {
///         sim.objects.register::<Rock>("rocks").ok();
///         50.0
///     }
///
///     fn update(&self, sim: &mut Simulator, y: &mut f64) {
///         *y += if sim.input().pressed { -1.0 } else { 1.0 };
///         if !(0.0..=100.0).contains(y) {
///             sim.end();
///         }
///     }
/// }
/// ```
pub trait GameAdapter {
    /// Game-specific state rebuilt by every `init`.
    type Context;

    /// Label used in logs and reports.
    fn name(&self) -> &str;

    /// Populate the (already reset) simulator and return fresh game state.
    fn init(&self, sim: &mut Simulator) -> Self::Context;

    /// Advance the game by one tick.
    fn update(&self, sim: &mut Simulator, ctx: &mut Self::Context);
}

/// A [`GameAdapter`] built from an init closure and an update closure.
///
/// Handy in tests and for quick experiments where a dedicated type would be
/// noise.
pub struct FnGame<C, I, U> {
    name:    String,
    init:    I,
    update:  U,
    _marker: PhantomData<fn() -> C>,
}

impl<C, I, U> FnGame<C, I, U>
where
    I: Fn(&mut Simulator) -> C,
    U: Fn(&mut Simulator, &mut C),
{
    pub fn new(name: impl Into<String>, init: I, update: U) -> Self {
        Self { name: name.into(), init, update, _marker: PhantomData }
    }
}

impl<C, I, U> GameAdapter for FnGame<C, I, U>
where
    I: Fn(&mut Simulator) -> C,
    U: Fn(&mut Simulator, &mut C),
{
    type Context = C;

    fn name(&self) -> &str {
        &self.name
    }

    fn init(&self, sim: &mut Simulator) -> C {
        (self.init)(sim)
    }

    fn update(&self, sim: &mut Simulator, ctx: &mut C) {
        (self.update)(sim, ctx)
    }
}
