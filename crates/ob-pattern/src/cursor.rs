//! `PatternCursor` — the playback position within a pattern.
//!
//! The cursor is a plain `Copy` value advanced by [`PatternCursor::step`], a
//! pure function of the cursor and the pattern.  The simulator owns one
//! cursor per run and steps it exactly once per tick.

use crate::Pattern;

/// Position within a [`Pattern`] plus the button state it last produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternCursor {
    action_index:      usize,
    elapsed_in_action: u32,
    pressed:           bool,
}

impl PatternCursor {
    /// A cursor at the first action with the button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one tick of `pattern`.
    ///
    /// The returned cursor's [`pressed`][Self::pressed] is the button state
    /// for the tick just consumed.  An action counts `duration_ticks` ticks;
    /// the tick after its last one is the transition tick, which already
    /// reports the next action's state without counting toward it.  The first
    /// action therefore lasts `duration_ticks` and every later action
    /// `duration_ticks + 1`.
    ///
    /// When the last action runs out the pressed state is left as it was, so
    /// it persists for the rest of the run; an empty pattern never presses
    /// the button.
    #[must_use]
    pub fn step(self, pattern: &Pattern) -> Self {
        let Some(action) = pattern.get(self.action_index) else {
            return self;
        };

        if self.elapsed_in_action >= action.duration_ticks() {
            let next = self.action_index + 1;
            let pressed = pattern.get(next).map_or(self.pressed, |a| a.kind().is_pressed());
            Self { action_index: next, elapsed_in_action: 0, pressed }
        } else {
            Self {
                action_index:      self.action_index,
                elapsed_in_action: self.elapsed_in_action + 1,
                pressed:           action.kind().is_pressed(),
            }
        }
    }

    /// Button state produced by the most recent step.
    #[inline]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Index of the action the next step will consume.
    #[inline]
    pub fn action_index(&self) -> usize {
        self.action_index
    }

    /// Ticks already consumed from the current action.
    #[inline]
    pub fn elapsed_in_action(&self) -> u32 {
        self.elapsed_in_action
    }

    /// `true` once every action of `pattern` has been consumed.
    pub fn is_exhausted(&self, pattern: &Pattern) -> bool {
        self.action_index >= pattern.len()
    }
}
