//! Tests for ob-sim.

use ob_core::{SimConfig, Tick};
use ob_pattern::{InputAction, Pattern, hold_only, no_input};

use crate::{FnGame, GameAdapter, InputState, RunObserver, RunOutcome, RunResult, Simulator};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sim() -> Simulator {
    Simulator::new(SimConfig::default()).unwrap()
}

/// Records every tick's input state into the context.
fn input_recorder() -> impl GameAdapter<Context = Vec<InputState>> {
    FnGame::new(
        "recorder",
        |_sim: &mut Simulator| Vec::new(),
        |sim: &mut Simulator, seen: &mut Vec<InputState>| seen.push(sim.input()),
    )
}

/// Never ends, never scores.
fn idle_game() -> impl GameAdapter<Context = ()> {
    FnGame::new("idle", |_sim: &mut Simulator| (), |_sim: &mut Simulator, _ctx: &mut ()| {})
}

fn pattern(states: &[bool]) -> Pattern {
    states
        .iter()
        .map(|&p| if p { InputAction::hold(1).unwrap() } else { InputAction::release(1).unwrap() })
        .collect()
}

#[derive(Debug)]
struct Dot;

// ── Input edge detection ──────────────────────────────────────────────────────

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn edges_follow_previous_tick() {
        let mut s = sim();
        s.update_input(true);
        assert_eq!(s.input(), InputState { pressed: true, just_pressed: true, just_released: false });
        s.update_input(true);
        assert_eq!(s.input(), InputState { pressed: true, just_pressed: false, just_released: false });
        s.update_input(false);
        assert_eq!(s.input(), InputState { pressed: false, just_pressed: false, just_released: true });
        s.update_input(true);
        assert_eq!(s.input(), InputState { pressed: true, just_pressed: true, just_released: false });
    }

    #[test]
    fn game_sees_edges_from_pattern() {
        let mut s = sim();
        let game = input_recorder();
        let mut seen = s.init_game(&game);
        // One-tick actions after the first also fill their transition tick.
        s.simulate_game(&game, &mut seen, 6, &pattern(&[false, true, false]));

        let pressed: Vec<bool> = seen.iter().map(|i| i.pressed).collect();
        assert_eq!(pressed, vec![false, true, true, false, false, false]);
        assert!(seen[1].just_pressed);
        assert!(!seen[2].just_pressed);
        assert!(seen[3].just_released);
    }

    #[test]
    fn first_tick_released_has_no_edge() {
        let mut s = sim();
        s.update_input(false);
        assert_eq!(s.input(), InputState::default());
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn never_ending_game_times_out_at_max_ticks() {
        let mut s = sim();
        let r = s.run_fresh(&idle_game(), 100, &no_input(600).unwrap());
        assert_eq!(r.ticks, 100);
        assert_eq!(r.outcome, RunOutcome::TimedOut);
        assert!(r.game_over.is_none());
        assert!(r.events.is_empty());
    }

    #[test]
    fn end_on_first_tick() {
        let game = FnGame::new("suicide", |_s: &mut Simulator| (), |s: &mut Simulator, _c: &mut ()| {
            s.end()
        });
        let mut s = sim();
        let r = s.run_fresh(&game, 1000, &Pattern::empty());
        assert_eq!(r.ticks, 1);
        assert_eq!(r.outcome, RunOutcome::GameOver);
        let over = r.game_over.unwrap();
        assert_eq!(over.tick, Tick(0));
        assert_eq!(r.events.iter().filter(|e| e.as_game_over().is_some()).count(), 1);
    }

    #[test]
    fn end_is_idempotent() {
        let mut s = sim();
        s.add_score(5.0);
        s.end();
        s.add_score(1.0);
        s.end();
        let overs: Vec<_> = s.events().iter().filter_map(|e| e.as_game_over()).collect();
        assert_eq!(overs.len(), 1);
        assert_eq!(overs[0].score, 5.0);
    }

    #[test]
    fn score_every_tick() {
        let game = FnGame::new("ticker", |_s: &mut Simulator| (), |s: &mut Simulator, _c: &mut ()| {
            s.add_score(1.0)
        });
        let mut s = sim();
        let r = s.run_fresh(&game, 120, &Pattern::empty());
        assert_eq!(r.score, 120.0);
        assert_eq!(r.score_events().count(), 120);
        assert!((r.duration_seconds - 2.0).abs() < 1e-12);

        let ticks: Vec<u64> = r.score_events().map(|e| e.tick.0).collect();
        assert_eq!(ticks, (0..120).collect::<Vec<_>>());
    }

    #[test]
    fn score_every_tick_until_end() {
        const END_AT: u64 = 90;
        let game = FnGame::new("ticker", |_s: &mut Simulator| (), |s: &mut Simulator, _c: &mut ()| {
            s.add_score(1.0);
            if s.tick().0 + 1 == END_AT {
                s.end();
            }
        });
        let mut s = sim();
        let r = s.run_fresh(&game, 1000, &Pattern::empty());

        assert_eq!(r.outcome, RunOutcome::GameOver);
        assert_eq!(r.ticks, END_AT);
        assert_eq!(r.score, END_AT as f64);
        assert!((r.duration_seconds - 1.5).abs() < 1e-12);

        let over = r.game_over.unwrap();
        assert_eq!(over.tick, Tick(END_AT - 1));
        assert_eq!(over.score, END_AT as f64);
        assert_eq!(r.events.iter().filter(|e| e.as_game_over().is_some()).count(), 1);
    }

    #[test]
    fn events_are_tick_ordered() {
        let game = FnGame::new(
            "mixed",
            |_s: &mut Simulator| (),
            |s: &mut Simulator, _c: &mut ()| {
                if s.tick().0 % 3 == 0 {
                    s.record("beat", s.tick().0 as f64);
                }
                if s.input().pressed {
                    s.add_score_at(2.0, 10.0, 20.0);
                }
                if s.tick().0 == 50 {
                    s.end();
                }
            },
        );
        let mut s = sim();
        let r = s.run_fresh(&game, 1000, &hold_only(600).unwrap());
        assert!(r.events.windows(2).all(|w| w[0].tick() <= w[1].tick()));
        assert_eq!(r.ticks, 51);
        let first = r.score_events().next().unwrap();
        assert_eq!(first.position.map(|p| (p.x, p.y)), Some((10.0, 20.0)));
    }

    #[test]
    fn difficulty_steps_with_ticks() {
        let game = FnGame::new(
            "difficulty-probe",
            |_s: &mut Simulator| Vec::new(),
            |s: &mut Simulator, seen: &mut Vec<(u64, u32)>| seen.push((s.tick().0, s.difficulty())),
        );
        let mut s = sim();
        let mut seen = s.init_game(&game);
        s.simulate_game(&game, &mut seen, 7201, &Pattern::empty());

        assert_eq!(seen[0], (0, 1));
        assert_eq!(seen[3599], (3599, 1));
        assert_eq!(seen[3600], (3600, 2));
        assert_eq!(seen[7200], (7200, 3));
    }

    #[test]
    fn short_difficulty_step() {
        let cfg = SimConfig { difficulty_step_ticks: 10, ..SimConfig::default() };
        let mut s = Simulator::new(cfg).unwrap();
        s.run_fresh(&idle_game(), 25, &Pattern::empty());
        assert_eq!(s.difficulty(), 3);
    }

    #[test]
    fn zero_step_config_rejected() {
        let cfg = SimConfig { difficulty_step_ticks: 0, ..SimConfig::default() };
        assert!(Simulator::new(cfg).is_err());
        let cfg = SimConfig { ticks_per_second: 0, ..SimConfig::default() };
        assert!(Simulator::new(cfg).is_err());
    }
}

// ── Reset between runs ────────────────────────────────────────────────────────

#[cfg(test)]
mod reset_tests {
    use super::*;

    fn spawner() -> impl GameAdapter<Context = u32> {
        FnGame::new(
            "spawner",
            |s: &mut Simulator| {
                s.objects.register::<Dot>("dots").unwrap();
                0u32
            },
            |s: &mut Simulator, spawned: &mut u32| {
                s.objects.add("dots", Dot).unwrap();
                *spawned += 1;
                s.add_score(1.0);
                if *spawned == 30 {
                    s.end();
                }
            },
        )
    }

    #[test]
    fn init_clears_previous_run() {
        let game = spawner();
        let mut s = sim();
        let first = s.run_fresh(&game, 1000, &Pattern::empty());
        assert_eq!(s.objects.entity_count("dots"), Some(30));
        assert!(s.is_game_over());

        let ctx = s.init_game(&game);
        assert_eq!(ctx, 0);
        assert_eq!(s.tick(), Tick::ZERO);
        assert_eq!(s.score(), 0.0);
        assert_eq!(s.difficulty(), 1);
        assert!(!s.is_game_over());
        assert!(s.events().is_empty());
        assert_eq!(s.input(), InputState::default());
        assert_eq!(s.objects.entity_count("dots"), Some(0));

        let second = s.run_fresh(&game, 1000, &Pattern::empty());
        assert_eq!(first.score, second.score);
        assert_eq!(first.ticks, second.ticks);
    }

    #[test]
    fn runs_get_distinct_but_reproducible_rng() {
        let game = FnGame::new(
            "dice",
            |s: &mut Simulator| s.rng.random_int(0, 1_000_000),
            |s: &mut Simulator, _c: &mut i64| s.end(),
        );

        let mut a = sim();
        let a0 = a.init_game(&game);
        let a1 = a.init_game(&game);
        assert_ne!(a0, a1);

        let mut b = sim();
        assert_eq!(b.init_game(&game), a0);
        assert_eq!(b.init_game(&game), a1);
        assert_eq!(b.runs_started(), 2);

        b.reseed(42);
        assert_eq!(b.runs_started(), 0);
        assert_eq!(b.init_game(&game), a0);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        ticks: Vec<Tick>,
        ends:  usize,
        last:  Option<RunResult>,
    }

    impl RunObserver for Counting {
        fn on_tick_end(&mut self, tick: Tick, sim: &Simulator) {
            assert_eq!(sim.tick(), tick + 1);
            self.ticks.push(tick);
        }

        fn on_run_end(&mut self, result: &RunResult) {
            self.ends += 1;
            self.last = Some(result.clone());
        }
    }

    #[test]
    fn observer_sees_every_tick_once() {
        let game = idle_game();
        let mut s = sim();
        let mut ctx = s.init_game(&game);
        let mut obs = Counting::default();
        let r = s.simulate_game_observed(&game, &mut ctx, 10, &Pattern::empty(), &mut obs);

        assert_eq!(obs.ticks, (0..10).map(Tick).collect::<Vec<_>>());
        assert_eq!(obs.ends, 1);
        assert_eq!(obs.last.as_ref(), Some(&r));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn edge_flags_are_consistent(presses in proptest::collection::vec(any::<bool>(), 1..200)) {
            let mut s = sim();
            let mut prev = false;
            for &p in &presses {
                s.update_input(p);
                let i = s.input();
                prop_assert!(!(i.just_pressed && i.just_released));
                prop_assert_eq!(i.just_pressed, p && !prev);
                prop_assert_eq!(i.just_released, !p && prev);
                prev = p;
            }
        }

        #[test]
        fn ticks_never_exceed_budget(max_ticks in 0u64..500, end_at in 0u64..600) {
            let game = FnGame::new(
                "ender",
                |_s: &mut Simulator| (),
                move |s: &mut Simulator, _c: &mut ()| if s.tick().0 == end_at { s.end() },
            );
            let mut s = sim();
            let r = s.run_fresh(&game, max_ticks, &Pattern::empty());
            prop_assert!(r.ticks <= max_ticks);
            if end_at < max_ticks {
                prop_assert_eq!(r.ticks, end_at + 1);
                prop_assert_eq!(r.outcome, RunOutcome::GameOver);
            } else {
                prop_assert_eq!(r.ticks, max_ticks);
                prop_assert_eq!(r.outcome, RunOutcome::TimedOut);
            }
        }
    }
}
