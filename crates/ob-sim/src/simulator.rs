//! The `Simulator` struct and its tick loop.

use ob_core::{SimConfig, SimRng, Tick};
use ob_pattern::{Pattern, PatternCursor};
use ob_pool::PoolMap;
use tracing::{debug, trace};

use crate::{
    CustomEvent, GameAdapter, GameOverEvent, InputState, NoopObserver, Position, RunObserver,
    RunOutcome, RunResult, ScoreEvent, SimEvent, SimResult,
};

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Headless runtime for one-button games.
///
/// Owns every piece of per-run state: tick counter, score, difficulty, input,
/// entity pools, game-over flag, event log and RNG.  [`init_game`] wipes all
/// of it before handing the simulator to the game, so consecutive runs share
/// nothing but the configuration.
///
/// `objects` and `rng` are public so a game can borrow a pool and draw random
/// numbers in the same statement.  Everything else is read through accessors
/// and changed only through the operations below.
///
/// [`init_game`]: Simulator::init_game
pub struct Simulator {
    config:       SimConfig,
    tick:         Tick,
    score:        f64,
    difficulty:   u32,
    input:        InputState,
    is_game_over: bool,
    events:       Vec<SimEvent>,

    /// Entity pools, keyed by name.  Games register theirs in `init`.
    pub objects: PoolMap,

    /// Per-run RNG, re-derived on every `init_game`.
    pub rng: SimRng,

    /// Number of runs started since construction (or the last `reseed`).
    runs: u64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::with_valid_config(SimConfig::default())
    }
}

impl Simulator {
    /// Build a simulator, rejecting configurations with a zero tick rate or
    /// difficulty step.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SimConfig) -> Self {
        let rng = run_rng(config.seed, 0);
        let difficulty = config.difficulty_at(Tick::ZERO);
        Self {
            config,
            tick: Tick::ZERO,
            score: 0.0,
            difficulty,
            input: InputState::default(),
            is_game_over: false,
            events: Vec::new(),
            objects: PoolMap::new(),
            rng,
            runs: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The tick currently being simulated.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// `1 + tick / difficulty_step_ticks`.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// The current run's event log, oldest first.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// How many times `init_game` has been called since construction or the
    /// last [`reseed`][Self::reseed].
    pub fn runs_started(&self) -> u64 {
        self.runs
    }

    /// Seconds of simulated time elapsed in the current run.
    pub fn elapsed_seconds(&self) -> f64 {
        self.config.seconds(self.tick.0)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Restart the run-seed sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.runs = 0;
        self.rng = run_rng(seed, 0);
    }

    /// Reset all per-run state, then let `game` register its pools.
    ///
    /// Returns the game's fresh context for this run.
    pub fn init_game<G: GameAdapter + ?Sized>(&mut self, game: &G) -> G::Context {
        self.reset();
        game.init(self)
    }

    fn reset(&mut self) {
        self.tick = Tick::ZERO;
        self.score = 0.0;
        self.difficulty = self.config.difficulty_at(Tick::ZERO);
        self.input = InputState::default();
        self.is_game_over = false;
        self.events.clear();
        self.objects.reset();
        self.rng = run_rng(self.config.seed, self.runs);
        self.runs += 1;
    }

    // ── Game-facing operations ────────────────────────────────────────────

    /// Feed this tick's button state; derives the edge flags.
    pub fn update_input(&mut self, pressed: bool) {
        self.input = self.input.next(pressed);
    }

    /// Add `points` to the score and log a score event at the current tick.
    pub fn add_score(&mut self, points: f64) {
        self.push_score(points, None);
    }

    /// [`add_score`][Self::add_score] with the position the points were
    /// earned at.
    pub fn add_score_at(&mut self, points: f64, x: f64, y: f64) {
        self.push_score(points, Some(Position { x, y }));
    }

    fn push_score(&mut self, points: f64, position: Option<Position>) {
        self.score += points;
        self.events.push(SimEvent::Score(ScoreEvent { points, position, tick: self.tick }));
    }

    /// Signal game over.  Only the first call in a run has any effect.
    pub fn end(&mut self) {
        if self.is_game_over {
            return;
        }
        self.is_game_over = true;
        self.events.push(SimEvent::GameOver(GameOverEvent { score: self.score, tick: self.tick }));
        trace!(tick = self.tick.0, score = self.score, "game over");
    }

    /// Append a game-defined telemetry event.
    pub fn record(&mut self, kind: impl Into<String>, value: f64) {
        self.events.push(SimEvent::Custom(CustomEvent {
            kind: kind.into(),
            value,
            tick: self.tick,
        }));
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// [`init_game`][Self::init_game] followed by
    /// [`simulate_game`][Self::simulate_game] with the fresh context.
    pub fn run_fresh<G: GameAdapter + ?Sized>(
        &mut self,
        game: &G,
        max_ticks: u64,
        pattern: &Pattern,
    ) -> RunResult {
        let mut ctx = self.init_game(game);
        self.simulate_game(game, &mut ctx, max_ticks, pattern)
    }

    /// Drive `game` with `pattern` until it ends or `max_ticks` is reached.
    ///
    /// The simulator must already be initialised for `game` (see
    /// [`init_game`][Self::init_game]) and `ctx` must be that call's context.
    pub fn simulate_game<G: GameAdapter + ?Sized>(
        &mut self,
        game: &G,
        ctx: &mut G::Context,
        max_ticks: u64,
        pattern: &Pattern,
    ) -> RunResult {
        self.simulate_game_observed(game, ctx, max_ticks, pattern, &mut NoopObserver)
    }

    /// [`simulate_game`][Self::simulate_game] with per-tick observer
    /// callbacks.
    pub fn simulate_game_observed<G, O>(
        &mut self,
        game: &G,
        ctx: &mut G::Context,
        max_ticks: u64,
        pattern: &Pattern,
        observer: &mut O,
    ) -> RunResult
    where
        G: GameAdapter + ?Sized,
        O: RunObserver,
    {
        let mut cursor = PatternCursor::new();

        while !self.is_game_over && self.tick.0 < max_ticks {
            let now = self.tick;

            cursor = cursor.step(pattern);
            self.update_input(cursor.pressed());

            game.update(self, ctx);

            self.tick = now + 1;
            self.difficulty = self.config.difficulty_at(self.tick);

            observer.on_tick_end(now, self);
        }

        let result = self.result();
        debug!(
            game = game.name(),
            outcome = ?result.outcome,
            ticks = result.ticks,
            score = result.score,
            "run finished"
        );
        observer.on_run_end(&result);
        result
    }

    /// Snapshot the current run as a [`RunResult`].
    pub fn result(&self) -> RunResult {
        let game_over = self.events.iter().find_map(SimEvent::as_game_over).copied();
        RunResult {
            score:            self.score,
            ticks:            self.tick.0,
            duration_seconds: self.elapsed_seconds(),
            events:           self.events.clone(),
            game_over,
            outcome: if self.is_game_over { RunOutcome::GameOver } else { RunOutcome::TimedOut },
        }
    }
}

/// RNG for the `run`-th run under `seed`.
fn run_rng(seed: u64, run: u64) -> SimRng {
    SimRng::new(seed).child(run)
}
