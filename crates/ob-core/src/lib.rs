//! `ob-core` — foundational types for the one-button game evaluation framework.
//!
//! This crate is a dependency of every other `ob-*` crate.  It has no `ob-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`time`]    | `Tick`, `SimConfig`, tick ↔ second conversion              |
//! | [`rng`]     | `SimRng` (seeded), `random_range` / `random_int` helpers   |
//! | [`geom`]    | Box, rect, circle, point and line collision predicates    |
//! | [`error`]   | `ObError`, `ObResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geom;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ObError, ObResult};
pub use geom::{
    clamp, collide_boxes, collide_circles, collide_lines, collide_point_circle,
    collide_point_rect, collide_rect_circle, collide_rects, is_off_screen,
};
pub use rng::SimRng;
pub use time::{SimConfig, Tick, DEFAULT_DIFFICULTY_STEP_TICKS, DEFAULT_TICKS_PER_SECOND};
