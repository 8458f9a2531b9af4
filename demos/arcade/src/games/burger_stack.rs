//! Burger Stack — drop sliding ingredients onto a growing stack.
//!
//! An ingredient slides back and forth near the top of the field; a press
//! drops it, and wind pushes it sideways while it falls.  Drops are scored
//! by how well they line up with the layer below.  Following the current
//! recipe pays a bonus, and topping a finished recipe with a bun completes
//! the burger and clears the stack.  The run ends when an ingredient misses
//! the stack entirely or overhangs the layer below by more than half its
//! width.
//!
//! The field is 100 wide and 100 tall; horizontal and vertical distances are
//! scaled separately from a 400 × 500 canvas.

use ob_sim::{GameAdapter, Simulator};

use super::{register, spawn};

const STACK: &str = "stack";

const FIELD_WIDTH:   f64 = 100.0;
const FIELD_HEIGHT:  f64 = 100.0;
const SPAWN_Y:       f64 = 10.0;
const PLATE_X:       f64 = 50.0;
const PLATE_Y:       f64 = 92.0;
const PLATE_WIDTH:   f64 = 25.0;
const PLATE_HEIGHT:  f64 = 4.0;

const DROP_VELOCITY: f64 = 0.2;
const GRAVITY:       f64 = 0.04;
const WIND_FACTOR:   f64 = 1.5 / 4.0;

const PERFECT_OFFSET: f64 = 1.25;
const GOOD_OFFSET:    f64 = 3.75;
const PERFECT_BONUS:  f64 = 25.0;
const BURGER_BONUS:   f64 = 100.0;

/// Ticks between the last bun landing and the completion bonus.
const CLEAR_DELAY_TICKS: u64 = 90;
/// Further ticks before the next bottom bun appears.
const RESTART_DELAY_TICKS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    BottomBun,
    Patty,
    Cheese,
    Lettuce,
    Tomato,
    Onion,
    TopBun,
}

impl Kind {
    const ALL: [Kind; 7] = [
        Kind::BottomBun,
        Kind::Patty,
        Kind::Cheese,
        Kind::Lettuce,
        Kind::Tomato,
        Kind::Onion,
        Kind::TopBun,
    ];

    fn height(self) -> f64 {
        match self {
            Kind::BottomBun => 2.0,
            Kind::Patty => 3.0,
            Kind::Cheese => 1.0,
            Kind::Lettuce => 1.6,
            Kind::Tomato => 1.4,
            Kind::Onion => 1.0,
            Kind::TopBun => 2.4,
        }
    }
}

const RECIPES: [&[Kind]; 3] = [
    &[Kind::BottomBun, Kind::Patty, Kind::Cheese, Kind::TopBun],
    &[Kind::BottomBun, Kind::Patty, Kind::Lettuce, Kind::Tomato, Kind::TopBun],
    &[
        Kind::BottomBun,
        Kind::Patty,
        Kind::Cheese,
        Kind::Lettuce,
        Kind::Tomato,
        Kind::Onion,
        Kind::TopBun,
    ],
];

#[derive(Debug, Clone)]
struct Ingredient {
    kind:    Kind,
    x:       f64,
    y:       f64,
    width:   f64,
    height:  f64,
    vx:      f64,
    vy:      f64,
    falling: bool,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Playing,
    /// Burger finished; the stack clears at `clear_at` and a new bun
    /// appears at `restart_at`.
    Clearing { clear_at: u64, restart_at: u64 },
}

/// Per-run state: the falling ingredient, the recipe and the combo.
#[derive(Debug, Clone)]
pub struct BurgerState {
    current:         Option<Ingredient>,
    phase:           Phase,
    recipe:          &'static [Kind],
    progress:        Vec<Kind>,
    recipe_complete: bool,
    combo:           u32,
    wind:            f64,
    /// Local difficulty; raises wind and slide speed as the stack grows.
    heat:            f64,
}

pub struct BurgerStack;

impl BurgerStack {
    fn pick_recipe(sim: &mut Simulator) -> &'static [Kind] {
        RECIPES[sim.rng.gen_range(0..RECIPES.len())]
    }

    fn next_kind(sim: &mut Simulator, st: &BurgerState) -> Kind {
        if !st.recipe_complete {
            if let Some(&kind) = st.recipe.get(st.progress.len()) {
                return kind;
            }
        }
        Kind::ALL[sim.rng.gen_range(0..Kind::ALL.len())]
    }

    fn new_ingredient(sim: &mut Simulator, st: &mut BurgerState, kind: Kind) {
        let direction = if sim.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        st.wind = (sim.rng.random_range(0.0, 0.8) + 0.4) * st.heat * direction;

        let sign = if sim.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        st.current = Some(Ingredient {
            kind,
            x:       FIELD_WIDTH / 2.0,
            y:       SPAWN_Y,
            width:   sim.rng.random_range(17.5, 22.5),
            height:  kind.height(),
            vx:      sim.rng.random_range(0.25, 0.5) * sign,
            vy:      0.0,
            falling: false,
        });
    }

    /// Score for a drop `offset` away from the layer below, given the
    /// number of layers already stacked.
    fn drop_score(st: &mut BurgerState, layers: usize, offset: f64) -> (f64, bool) {
        let perfect = offset < PERFECT_OFFSET;
        let accuracy = if perfect {
            st.combo += 1;
            2.0
        } else if offset < GOOD_OFFSET {
            st.combo += 1;
            1.5
        } else {
            st.combo = 0;
            1.0
        };
        let combo = if st.combo >= 3 { 1.0 + st.combo as f64 * 0.1 } else { 1.0 };
        ((layers as f64 * 10.0 * accuracy * combo).floor(), perfect)
    }

    /// Settle `ing` on top of `support`, score it and queue the next piece.
    fn land(sim: &mut Simulator, st: &mut BurgerState, ing: Ingredient, support: (f64, f64, f64)) {
        let (below_x, below_top, _) = support;
        let mut ing = ing;
        ing.y = below_top - ing.height / 2.0;
        ing.falling = false;

        let layers = sim.objects.entity_count(STACK).unwrap_or(0);
        let (points, perfect) = Self::drop_score(st, layers, (ing.x - below_x).abs());
        sim.add_score_at(points, ing.x, ing.y);
        if perfect {
            sim.add_score(PERFECT_BONUS);
            sim.record("perfect", st.combo as f64);
        }

        let kind = ing.kind;
        let (x, y) = (ing.x, ing.y);
        spawn(sim, STACK, ing);

        let mut force_top_bun = false;
        if !st.recipe_complete {
            st.progress.push(kind);
            if st.progress.len() == st.recipe.len() && st.progress == st.recipe {
                st.recipe_complete = true;
                let bonus = st.recipe.len() as f64 * 50.0;
                sim.add_score_at(bonus, x, y);
                sim.record("recipe", bonus);
                force_top_bun = kind != Kind::TopBun;
            }
        }

        if kind == Kind::TopBun && st.recipe_complete {
            let now = sim.tick().0;
            st.phase = Phase::Clearing {
                clear_at:   now + CLEAR_DELAY_TICKS,
                restart_at: now + CLEAR_DELAY_TICKS + RESTART_DELAY_TICKS,
            };
        } else if force_top_bun {
            Self::new_ingredient(sim, st, Kind::TopBun);
        } else {
            let next = Self::next_kind(sim, st);
            Self::new_ingredient(sim, st, next);
        }

        let stacked = sim.objects.entity_count(STACK).unwrap_or(0);
        if stacked % 5 == 0 {
            st.heat += 0.2;
            if let (Phase::Playing, Some(cur)) = (st.phase, st.current.as_mut()) {
                cur.vx *= 1.1;
            }
        }
    }

    /// Centre x, top edge and width of whatever the next layer lands on.
    fn support(sim: &Simulator) -> (f64, f64, f64) {
        sim.objects
            .pool::<Ingredient>(STACK)
            .and_then(|pool| pool.iter().last())
            .map(|top| (top.x, top.y - top.height / 2.0, top.width))
            .unwrap_or((PLATE_X, PLATE_Y - PLATE_HEIGHT / 2.0, PLATE_WIDTH))
    }

    /// `true` if some layer overhangs the one below it by more than half
    /// the lower layer's width.
    fn toppled(sim: &Simulator) -> bool {
        sim.objects
            .pool::<Ingredient>(STACK)
            .map(|pool| {
                pool.as_slice()
                    .windows(2)
                    .any(|pair| (pair[1].x - pair[0].x).abs() > pair[0].width / 2.0)
            })
            .unwrap_or(false)
    }
}

impl GameAdapter for BurgerStack {
    type Context = BurgerState;

    fn name(&self) -> &str {
        "BurgerStack"
    }

    fn init(&self, sim: &mut Simulator) -> BurgerState {
        register::<Ingredient>(sim, STACK);
        let mut st = BurgerState {
            current:         None,
            phase:           Phase::Playing,
            recipe:          Self::pick_recipe(sim),
            progress:        Vec::new(),
            recipe_complete: false,
            combo:           0,
            wind:            0.0,
            heat:            1.0,
        };
        Self::new_ingredient(sim, &mut st, Kind::BottomBun);
        st
    }

    fn update(&self, sim: &mut Simulator, st: &mut BurgerState) {
        let now = sim.tick().0;

        if let Phase::Clearing { clear_at, restart_at } = st.phase {
            if now == clear_at {
                sim.add_score(BURGER_BONUS);
                sim.record("burger", BURGER_BONUS);
                if let Some(stack) = sim.objects.pool_mut::<Ingredient>(STACK) {
                    stack.clear();
                }
                st.progress.clear();
                st.recipe_complete = false;
                st.recipe = Self::pick_recipe(sim);
            }
            if now >= restart_at {
                st.phase = Phase::Playing;
                Self::new_ingredient(sim, st, Kind::BottomBun);
            }
            return;
        }

        let Some(mut ing) = st.current.take() else {
            return;
        };

        if !ing.falling {
            ing.x += ing.vx;
            if ing.x < ing.width / 2.0 || ing.x > FIELD_WIDTH - ing.width / 2.0 {
                ing.vx = -ing.vx;
            }
            if sim.input().just_pressed {
                ing.falling = true;
                ing.vy = DROP_VELOCITY;
            }
            st.current = Some(ing);
            return;
        }

        ing.vy += GRAVITY;
        ing.y += ing.vy;
        ing.x += st.wind * WIND_FACTOR;

        let support = Self::support(sim);
        let (below_x, below_top, below_width) = support;
        let reached = ing.y + ing.height / 2.0 >= below_top;
        let overlaps = ing.x + ing.width / 2.0 > below_x - below_width / 2.0
            && ing.x - ing.width / 2.0 < below_x + below_width / 2.0;

        if reached && overlaps {
            Self::land(sim, st, ing, support);
            if Self::toppled(sim) {
                sim.end();
            }
            return;
        }

        if ing.y > FIELD_HEIGHT {
            sim.end();
            return;
        }
        st.current = Some(ing);
    }
}
