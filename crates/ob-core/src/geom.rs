//! Collision predicates and scalar helpers for one-button games.
//!
//! All functions are pure.  Coordinates are `f64` in whatever unit the game
//! uses; the only fixed-unit helper is [`is_off_screen`], which assumes the
//! 0–100 normalised play field shared by the sample games.
//!
//! Boundary policy differs per predicate and follows the games' behaviour:
//!
//! | Predicate              | Touching boundaries       |
//! |------------------------|---------------------------|
//! | [`collide_boxes`]      | separated                 |
//! | [`collide_rects`]      | separated                 |
//! | [`collide_circles`]    | separated                 |
//! | [`collide_point_rect`] | inside                    |
//! | [`collide_lines`]      | intersecting (endpoints)  |

/// Side length of the normalised play field.
const FIELD_SIZE: f64 = 100.0;

/// Box–box overlap using **centre** coordinates and full extents.
///
/// Boxes whose edges merely touch are not colliding.
#[allow(clippy::too_many_arguments)]
pub fn collide_boxes(
    x1: f64, y1: f64, w1: f64, h1: f64,
    x2: f64, y2: f64, w2: f64, h2: f64,
) -> bool {
    let (hw1, hh1) = (w1 / 2.0, h1 / 2.0);
    let (hw2, hh2) = (w2 / 2.0, h2 / 2.0);

    let (left1, right1) = (x1 - hw1, x1 + hw1);
    let (top1, bottom1) = (y1 - hh1, y1 + hh1);
    let (left2, right2) = (x2 - hw2, x2 + hw2);
    let (top2, bottom2) = (y2 - hh2, y2 + hh2);

    left1 < right2 && right1 > left2 && top1 < bottom2 && bottom1 > top2
}

/// Rectangle–rectangle overlap using **top-left** coordinates.
#[allow(clippy::too_many_arguments)]
pub fn collide_rects(
    x1: f64, y1: f64, w1: f64, h1: f64,
    x2: f64, y2: f64, w2: f64, h2: f64,
) -> bool {
    x1 < x2 + w2 && x1 + w1 > x2 && y1 < y2 + h2 && y1 + h1 > y2
}

/// Circle–circle overlap (Euclidean distance strictly below the radius sum).
pub fn collide_circles(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt() < r1 + r2
}

/// Top-left rectangle vs circle: the closest rectangle point lies strictly
/// inside the circle.
pub fn collide_rect_circle(
    rx: f64, ry: f64, rw: f64, rh: f64,
    cx: f64, cy: f64, cr: f64,
) -> bool {
    let closest_x = clamp(cx, rx, rx + rw);
    let closest_y = clamp(cy, ry, ry + rh);
    let dx = closest_x - cx;
    let dy = closest_y - cy;
    dx * dx + dy * dy < cr * cr
}

/// Point inside a top-left rectangle (edges inclusive).
pub fn collide_point_rect(px: f64, py: f64, rx: f64, ry: f64, rw: f64, rh: f64) -> bool {
    px >= rx && px <= rx + rw && py >= ry && py <= ry + rh
}

/// Point strictly inside a circle.
pub fn collide_point_circle(px: f64, py: f64, cx: f64, cy: f64, cr: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy < cr * cr
}

/// Segment (x1,y1)–(x2,y2) intersects segment (x3,y3)–(x4,y4).
///
/// Parallel and collinear segments have a zero determinant and never
/// collide.
#[allow(clippy::too_many_arguments)]
pub fn collide_lines(
    x1: f64, y1: f64, x2: f64, y2: f64,
    x3: f64, y3: f64, x4: f64, y4: f64,
) -> bool {
    let denom = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if denom == 0.0 {
        return false;
    }
    let ua = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / denom;
    let ub = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / denom;
    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// `true` if the point lies outside the 0–100 play field by more than `margin`.
pub fn is_off_screen(x: f64, y: f64, margin: f64) -> bool {
    x < -margin || x > FIELD_SIZE + margin || y < -margin || y > FIELD_SIZE + margin
}

/// Constrain `value` to `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: when `min > max` the result is
/// `max`, matching `min(max(value, min), max)`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
