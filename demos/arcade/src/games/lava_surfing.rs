//! Lava Surfing — ride four undulating lava streams.
//!
//! Press while standing on a stream to jump; hold to fall faster and pass
//! through streams.  Rocks drift in along the streams and end the run on
//! contact; minerals score with a multiplier that grows on every pickup and
//! shrinks on every miss.

use std::f64::consts::TAU;

use ob_core::{collide_boxes, collide_circles};
use ob_sim::{GameAdapter, Simulator};

use super::{register, spawn};

const STREAMS:   &str = "streams";
const OBSTACLES: &str = "obstacles";
const MINERALS:  &str = "minerals";

const STREAM_COUNT:     usize = 4;
const STREAM_TOP:       f64   = 12.5;
const STREAM_SPACING:   f64   = 21.875;
const STREAM_THICKNESS: f64   = 3.75;

const PLAYER_X:      f64 = 12.5;
const PLAYER_WIDTH:  f64 = 5.0;
const PLAYER_HEIGHT: f64 = 2.5;
const GRAVITY:       f64 = 0.0625;
const JUMP_VELOCITY: f64 = -2.0;
const DRAG:          f64 = 0.99;

/// No rocks before this tick.
const GRACE_TICKS:       u64 = 120;
const MINERAL_GAP_TICKS: u64 = 60;
const MAX_MULTIPLIER:    u32 = 9;

#[derive(Debug, Clone)]
struct LavaStream {
    base_y:    f64,
    y:         f64,
    amplitude: f64,
    frequency: f64,
    phase:     f64,
}

#[derive(Debug, Clone)]
struct Rock {
    x:      f64,
    y:      f64,
    width:  f64,
    height: f64,
    speed:  f64,
    stream: usize,
}

#[derive(Debug, Clone)]
struct Mineral {
    x:         f64,
    y:         f64,
    size:      f64,
    speed:     f64,
    stream:    usize,
    value:     f64,
    collected: bool,
}

/// Per-run state of the surfer and the spawners.
#[derive(Debug, Clone)]
pub struct LavaState {
    y:                f64,
    vy:               f64,
    on_lava:          bool,
    multiplier:       u32,
    last_rock_tick:   u64,
    last_rock_stream: Option<usize>,
    rock_spacing:     u64,
    last_mineral:     u64,
}

pub struct LavaSurfing;

impl GameAdapter for LavaSurfing {
    type Context = LavaState;

    fn name(&self) -> &str {
        "LavaSurfing"
    }

    fn init(&self, sim: &mut Simulator) -> LavaState {
        register::<LavaStream>(sim, STREAMS);
        register::<Rock>(sim, OBSTACLES);
        register::<Mineral>(sim, MINERALS);

        for i in 0..STREAM_COUNT {
            let y = STREAM_TOP + i as f64 * STREAM_SPACING;
            let stream = LavaStream {
                base_y:    y,
                y,
                amplitude: sim.rng.random_range(0.75, 1.75),
                frequency: sim.rng.random_range(0.02, 0.04),
                phase:     sim.rng.random_range(0.0, TAU),
            };
            spawn(sim, STREAMS, stream);
        }

        let bottom = STREAM_TOP + (STREAM_COUNT - 1) as f64 * STREAM_SPACING;
        LavaState {
            y:                bottom - PLAYER_HEIGHT / 2.0,
            vy:               0.0,
            on_lava:          true,
            multiplier:       1,
            last_rock_tick:   0,
            last_rock_stream: None,
            rock_spacing:     120,
            last_mineral:     0,
        }
    }

    fn update(&self, sim: &mut Simulator, st: &mut LavaState) {
        let tick = sim.tick().0;
        let difficulty = sim.difficulty() as f64;
        let input = sim.input();

        // ── Streams ───────────────────────────────────────────────────────
        let mut stream_ys = [0.0; STREAM_COUNT];
        if let Some(streams) = sim.objects.pool_mut::<LavaStream>(STREAMS) {
            for (i, s) in streams.iter_mut().enumerate() {
                s.y = s.base_y + (tick as f64 * s.frequency + s.phase).sin() * s.amplitude;
                stream_ys[i] = s.y;
            }
        }

        // ── Surfer ────────────────────────────────────────────────────────
        if input.just_pressed && st.on_lava {
            st.vy = JUMP_VELOCITY;
            st.on_lava = false;
        }
        let pass_through = input.pressed;
        st.vy += if pass_through { GRAVITY * 1.5 } else { GRAVITY };
        st.vy *= DRAG;
        st.y += st.vy;

        if st.y > 100.0 + PLAYER_HEIGHT {
            st.y = -PLAYER_HEIGHT;
        } else if st.y < -PLAYER_HEIGHT {
            st.y = 100.0 + PLAYER_HEIGHT;
        }

        st.on_lava = false;
        if !pass_through && st.vy > 0.0 {
            let feet = st.y + PLAYER_HEIGHT / 2.0;
            if let Some(&sy) =
                stream_ys.iter().find(|&&sy| feet > sy && feet < sy + STREAM_THICKNESS)
            {
                st.y = sy - PLAYER_HEIGHT / 2.0;
                st.vy = 0.0;
                st.on_lava = true;
            }
        }

        // ── Rocks ─────────────────────────────────────────────────────────
        if tick - st.last_rock_tick > st.rock_spacing
            && tick > GRACE_TICKS
            && sim.rng.gen_bool(0.1 * difficulty)
        {
            let lanes: Vec<usize> =
                (0..STREAM_COUNT).filter(|&i| Some(i) != st.last_rock_stream).collect();
            let stream = lanes[sim.rng.gen_range(0..lanes.len())];
            let height = sim.rng.random_range(5.0, 8.75);
            let width = sim.rng.random_range(3.75, 7.5);
            let rock = Rock {
                x: 100.0 + width / 2.0,
                y: stream_ys[stream] - height / 2.0,
                width,
                height,
                speed: (1.0 + difficulty * 0.3) / 4.0,
                stream,
            };
            spawn(sim, OBSTACLES, rock);

            st.last_rock_tick = tick;
            st.last_rock_stream = Some(stream);
            st.rock_spacing = (120.0 - difficulty * 10.0).max(60.0) as u64;
        }

        let player_y = st.y;
        let mut hit = false;
        if let Some(rocks) = sim.objects.pool_mut::<Rock>(OBSTACLES) {
            rocks.for_each_and_remove_if(
                |r, _| {
                    r.x -= r.speed;
                    r.y = stream_ys[r.stream] - r.height / 2.0;
                    hit |= collide_boxes(
                        PLAYER_X,
                        player_y,
                        PLAYER_WIDTH * 0.8,
                        PLAYER_HEIGHT * 0.8,
                        r.x,
                        r.y,
                        r.width * 0.9,
                        r.height * 0.9,
                    );
                },
                |r, _| r.x < -r.width,
            );
        }
        if hit {
            sim.end();
            return;
        }

        // ── Minerals ──────────────────────────────────────────────────────
        if tick - st.last_mineral > MINERAL_GAP_TICKS && sim.rng.gen_bool(0.01 * difficulty) {
            let stream = sim.rng.gen_range(0..STREAM_COUNT);
            let size = sim.rng.random_range(3.0, 4.5);
            let value = (10.0 * (1.0 - stream as f64 / STREAM_COUNT as f64)).floor().max(5.0);
            let mineral = Mineral {
                x: 100.0 + size / 2.0,
                y: stream_ys[stream] - size / 2.0,
                size,
                speed: (1.0 + difficulty * 0.2) / 4.0,
                stream,
                value,
                collected: false,
            };
            spawn(sim, MINERALS, mineral);
            st.last_mineral = tick;
        }

        let mut collected: Vec<(f64, f64, f64)> = Vec::new();
        let mut missed = 0u32;
        if let Some(minerals) = sim.objects.pool_mut::<Mineral>(MINERALS) {
            minerals.for_each_and_remove_if(
                |m, _| {
                    m.x -= m.speed;
                    m.y = stream_ys[m.stream] - m.size / 2.0;
                    let touching = collide_circles(
                        PLAYER_X,
                        player_y,
                        PLAYER_WIDTH / 2.0,
                        m.x,
                        m.y,
                        m.size / 2.0 * 0.8,
                    );
                    if touching {
                        m.collected = true;
                        collected.push((m.value, m.x, m.y));
                    } else if m.x < -m.size {
                        missed += 1;
                    }
                },
                |m, _| m.collected || m.x < -m.size,
            );
        }

        for (value, x, y) in collected {
            st.multiplier = (st.multiplier + 1).min(MAX_MULTIPLIER);
            sim.add_score_at(value * st.multiplier as f64, x, y);
        }
        for _ in 0..missed {
            st.multiplier = st.multiplier.saturating_sub(1).max(1);
            sim.record("mineral_missed", st.multiplier as f64);
        }
    }
}
