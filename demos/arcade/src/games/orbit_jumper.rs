//! Orbit Jumper — hop between drifting planets before the fuel runs out.
//!
//! The player circles a planet and launches tangentially on press.  Orbiting
//! the central planet drains fuel, orbiting any other planet refuels, and a
//! launch costs a fixed amount.  Landing scores, with a multiplier that
//! grows over consecutive landings on moving planets.  The run ends when
//! fuel hits zero, the player leaves the field, or the orbited planet
//! drifts away.

use std::f64::consts::FRAC_PI_2;

use ob_core::{clamp, is_off_screen};
use ob_sim::{GameAdapter, Simulator};

use super::{register, spawn};

const PLANETS: &str = "planets";

const CENTRE:               f64 = 50.0;
const CENTRAL_RADIUS:       f64 = 6.25;
const CENTRAL_ORBIT:        f64 = 11.25;
const PLAYER_RADIUS:        f64 = 1.25;
const ORBIT_SPEED:          f64 = 0.05;
const LAUNCH_SPEED:         f64 = 0.75;
const PLAYER_MARGIN:        f64 = 2.5;
const PLANET_MARGIN:        f64 = 12.5;
const SPAWN_OFFSET:         f64 = 7.5;

const FUEL_MAX:             f64 = 100.0;
const FUEL_DRAIN:           f64 = 0.05;
const FUEL_REFILL:          f64 = 0.4;
const LAUNCH_COST:          f64 = 20.0;
const LANDING_COOLDOWN:     u32 = 10;
const MAX_MULTIPLIER:       u32 = 5;
const MAX_PLANETS:          usize = 5;
const FIRST_PLANET_TICK:    u64 = 120;
const PLANET_INTERVAL:      u64 = 60;
const RAMP_INTERVAL_TICKS:  u64 = 600;

#[derive(Debug, Clone)]
struct Planet {
    id:           u32,
    x:            f64,
    y:            f64,
    vx:           f64,
    vy:           f64,
    radius:       f64,
    orbit_radius: f64,
    central:      bool,
}

/// Per-run state of the jumper.
#[derive(Debug, Clone)]
pub struct OrbitState {
    x:            f64,
    y:            f64,
    vx:           f64,
    vy:           f64,
    /// Planet being orbited; `None` while in free flight.
    orbiting:     Option<u32>,
    orbit_angle:  f64,
    orbit_radius: f64,
    fuel:         f64,
    cooldown:     u32,
    combo:        u32,
    multiplier:   u32,
    next_id:      u32,
}

impl OrbitState {
    fn add_score(&self, sim: &mut Simulator, points: f64) {
        sim.add_score_at((points * self.multiplier as f64).floor(), self.x, self.y);
    }
}

pub struct OrbitJumper;

impl OrbitJumper {
    /// Speed ramp of this game: +0.1 every ten seconds at 60 tps.
    fn ramp(tick: u64) -> f64 {
        1.0 + 0.1 * (tick / RAMP_INTERVAL_TICKS) as f64
    }

    fn spawn_planet(sim: &mut Simulator, st: &mut OrbitState, ramp: f64) {
        let rng = &mut sim.rng;
        let (x, y, mut vx, mut vy) = match rng.gen_range(0..4) {
            0 => (
                rng.random_range(12.5, 87.5),
                -SPAWN_OFFSET,
                rng.random_range(-0.125, 0.125),
                rng.random_range(0.125, 0.25) * ramp,
            ),
            1 => (
                100.0 + SPAWN_OFFSET,
                rng.random_range(12.5, 87.5),
                rng.random_range(-0.25, -0.125) * ramp,
                rng.random_range(-0.125, 0.125),
            ),
            2 => (
                rng.random_range(12.5, 87.5),
                100.0 + SPAWN_OFFSET,
                rng.random_range(-0.125, 0.125),
                rng.random_range(-0.25, -0.125) * ramp,
            ),
            _ => (
                -SPAWN_OFFSET,
                rng.random_range(12.5, 87.5),
                rng.random_range(0.125, 0.25) * ramp,
                rng.random_range(-0.125, 0.125),
            ),
        };

        let speed = vx.hypot(vy);
        let target = clamp(speed, 0.125, 0.5 * ramp);
        if speed > 0.0 && speed != target {
            vx *= target / speed;
            vy *= target / speed;
        }

        let radius = rng.random_range(5.0, 7.5);
        let planet = Planet {
            id: st.next_id,
            x,
            y,
            vx,
            vy,
            radius,
            orbit_radius: radius * 2.0 + 1.25,
            central: false,
        };
        st.next_id += 1;
        spawn(sim, PLANETS, planet);
    }

    fn launch(sim: &mut Simulator, st: &mut OrbitState) {
        if st.orbiting.is_none() || st.fuel < LAUNCH_COST || st.cooldown > 0 {
            return;
        }
        st.orbiting = None;
        st.fuel -= LAUNCH_COST;

        let bonus = (st.orbit_radius * 0.8).floor();
        if bonus > 0.0 {
            st.add_score(sim, bonus);
        }
    }
}

impl GameAdapter for OrbitJumper {
    type Context = OrbitState;

    fn name(&self) -> &str {
        "OrbitJumper"
    }

    fn init(&self, sim: &mut Simulator) -> OrbitState {
        register::<Planet>(sim, PLANETS);
        let central = Planet {
            id:           0,
            x:            CENTRE,
            y:            CENTRE,
            vx:           0.0,
            vy:           0.0,
            radius:       CENTRAL_RADIUS,
            orbit_radius: CENTRAL_ORBIT,
            central:      true,
        };
        spawn(sim, PLANETS, central);

        OrbitState {
            x:            CENTRE + CENTRAL_ORBIT,
            y:            CENTRE,
            vx:           0.0,
            vy:           0.0,
            orbiting:     Some(0),
            orbit_angle:  0.0,
            orbit_radius: CENTRAL_ORBIT,
            fuel:         FUEL_MAX,
            cooldown:     0,
            combo:        0,
            multiplier:   1,
            next_id:      1,
        }
    }

    fn update(&self, sim: &mut Simulator, st: &mut OrbitState) {
        let tick = sim.tick().0;
        let ramp = Self::ramp(tick);

        if st.fuel <= 0.0 {
            sim.record("out_of_fuel", 0.0);
            sim.end();
            return;
        }

        if sim.input().just_pressed {
            Self::launch(sim, st);
        }

        // ── Player ────────────────────────────────────────────────────────
        match st.orbiting {
            Some(id) => {
                st.orbit_angle += ORBIT_SPEED;
                let planet = sim
                    .objects
                    .pool::<Planet>(PLANETS)
                    .and_then(|pool| pool.iter().find(|p| p.id == id))
                    .map(|p| (p.x, p.y, p.central));
                if let Some((px, py, central)) = planet {
                    st.x = px + st.orbit_angle.cos() * st.orbit_radius;
                    st.y = py + st.orbit_angle.sin() * st.orbit_radius;
                    st.fuel = if central {
                        (st.fuel - FUEL_DRAIN).max(0.0)
                    } else {
                        (st.fuel + FUEL_REFILL).min(FUEL_MAX)
                    };
                }
                st.vx = (st.orbit_angle + FRAC_PI_2).cos() * LAUNCH_SPEED;
                st.vy = (st.orbit_angle + FRAC_PI_2).sin() * LAUNCH_SPEED;
                st.cooldown = st.cooldown.saturating_sub(1);
            }
            None => {
                st.x += st.vx;
                st.y += st.vy;
                if is_off_screen(st.x, st.y, PLAYER_MARGIN) {
                    sim.end();
                    return;
                }
            }
        }

        // ── Planets ───────────────────────────────────────────────────────
        let mut landed: Option<Planet> = None;
        let mut lost_orbit = false;
        if let Some(planets) = sim.objects.pool_mut::<Planet>(PLANETS) {
            let (x, y, orbiting) = (st.x, st.y, st.orbiting);
            planets.for_each_and_remove_if(
                |p, _| {
                    p.x += p.vx;
                    p.y += p.vy;
                    if orbiting.is_none()
                        && landed.is_none()
                        && (x - p.x).hypot(y - p.y) < p.radius + PLAYER_RADIUS
                    {
                        landed = Some(p.clone());
                    }
                },
                |p, _| {
                    let gone = is_off_screen(p.x, p.y, PLANET_MARGIN);
                    if gone && orbiting == Some(p.id) {
                        lost_orbit = true;
                    }
                    gone
                },
            );
        }
        if lost_orbit {
            sim.end();
            return;
        }

        if let Some(planet) = landed {
            st.orbiting = Some(planet.id);
            st.orbit_radius = planet.orbit_radius;
            st.orbit_angle = (st.y - planet.y).atan2(st.x - planet.x);
            if planet.central {
                st.multiplier = 1;
                st.combo = 0;
            } else {
                st.combo += 1;
                st.multiplier = st.combo.min(MAX_MULTIPLIER);
            }
            // Smaller planets are worth more.
            st.add_score(sim, 10.0 + (5.0 / planet.radius).floor());
            sim.record("landing", st.multiplier as f64);
            st.cooldown = LANDING_COOLDOWN;
        }

        // ── Spawning ──────────────────────────────────────────────────────
        let planet_count = sim.objects.entity_count(PLANETS).unwrap_or(0);
        if tick == FIRST_PLANET_TICK
            || (tick > FIRST_PLANET_TICK && planet_count < MAX_PLANETS && tick % PLANET_INTERVAL == 0)
        {
            Self::spawn_planet(sim, st, ramp);
        }
    }
}
