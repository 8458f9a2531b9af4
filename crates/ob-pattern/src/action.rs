//! Core pattern types: `ActionKind`, `InputAction`, `Pattern`, `NamedPattern`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PatternError, PatternResult};

// ── ActionKind ────────────────────────────────────────────────────────────────

/// What the button does for the duration of one action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Hold,
    Release,
}

impl ActionKind {
    /// `true` for [`ActionKind::Hold`].
    #[inline]
    pub fn is_pressed(self) -> bool {
        matches!(self, ActionKind::Hold)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Hold    => "hold",
            ActionKind::Release => "release",
        })
    }
}

impl std::str::FromStr for ActionKind {
    type Err = PatternError;

    fn from_str(s: &str) -> PatternResult<Self> {
        match s.trim() {
            "hold"    => Ok(ActionKind::Hold),
            "release" => Ok(ActionKind::Release),
            other => Err(PatternError::Parse(format!(
                "invalid action kind {other:?}: expected \"hold\" or \"release\""
            ))),
        }
    }
}

// ── InputAction ───────────────────────────────────────────────────────────────

/// Hold or release the button for a fixed number of ticks (always ≥ 1).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InputAction {
    kind:           ActionKind,
    duration_ticks: u32,
}

impl InputAction {
    pub fn new(kind: ActionKind, duration_ticks: u32) -> PatternResult<Self> {
        if duration_ticks == 0 {
            return Err(PatternError::ZeroDuration);
        }
        Ok(Self { kind, duration_ticks })
    }

    pub fn hold(duration_ticks: u32) -> PatternResult<Self> {
        Self::new(ActionKind::Hold, duration_ticks)
    }

    pub fn release(duration_ticks: u32) -> PatternResult<Self> {
        Self::new(ActionKind::Release, duration_ticks)
    }

    /// Construct from a duration the caller has already proven non-zero.
    #[inline]
    pub(crate) fn from_positive(kind: ActionKind, duration_ticks: u32) -> Self {
        debug_assert!(duration_ticks > 0);
        Self { kind, duration_ticks: duration_ticks.max(1) }
    }

    #[inline]
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    #[inline]
    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }
}

// ── Pattern ───────────────────────────────────────────────────────────────────

/// An immutable, ordered sequence of input actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pattern {
    actions: Vec<InputAction>,
}

impl Pattern {
    pub fn new(actions: Vec<InputAction>) -> Self {
        Self { actions }
    }

    /// A pattern with no actions: the button is never pressed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[InputAction] {
        &self.actions
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&InputAction> {
        self.actions.get(index)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sum of all action durations.  Playback takes `len() - 1` more ticks,
    /// one transition tick per action after the first.
    pub fn total_ticks(&self) -> u64 {
        self.actions.iter().map(|a| a.duration_ticks as u64).sum()
    }

    /// Sum of the hold durations (transition ticks not included).
    pub fn hold_ticks(&self) -> u64 {
        self.actions
            .iter()
            .filter(|a| a.kind.is_pressed())
            .map(|a| a.duration_ticks as u64)
            .sum()
    }
}

impl FromIterator<InputAction> for Pattern {
    fn from_iter<I: IntoIterator<Item = InputAction>>(iter: I) -> Self {
        Self { actions: iter.into_iter().collect() }
    }
}

// ── NamedPattern ──────────────────────────────────────────────────────────────

/// A pattern labelled for reports (e.g. `"NoInput"`, `"Expert"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamedPattern {
    pub name:    String,
    pub pattern: Pattern,
}

impl NamedPattern {
    pub fn new(name: impl Into<String>, pattern: Pattern) -> Self {
        Self { name: name.into(), pattern }
    }
}
