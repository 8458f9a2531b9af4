//! Single-button input state with edge detection.

use serde::Serialize;

/// Button state for the current tick.
///
/// `just_pressed` and `just_released` are edge flags derived from the
/// previous tick's `pressed` value.  They are never both set, and
/// `just_pressed ⇒ pressed`, `just_released ⇒ !pressed`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InputState {
    pub pressed:       bool,
    pub just_pressed:  bool,
    pub just_released: bool,
}

impl InputState {
    /// The state after the button reads `pressed` this tick.
    #[inline]
    pub fn next(self, pressed: bool) -> Self {
        let was_pressed = self.pressed;
        Self {
            pressed,
            just_pressed:  pressed && !was_pressed,
            just_released: !pressed && was_pressed,
        }
    }
}
