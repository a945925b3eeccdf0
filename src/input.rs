//! Input model: keys, step directions, and the drag and motion state machines.
//!
//! `DragState` carries the context captured at drag start so each move can be
//! computed from the origin rather than accumulated. `Motion` is the two-state
//! in-flight flag: a step moves it to `Animating` and the settle timer returns
//! it to `Idle`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key, reduced to what the slider reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    /// The step this key requests, if any.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Previous),
            Self::ArrowRight => Some(Direction::Next),
            Self::Other => None,
        }
    }
}

/// Which way a step moves the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward offset 0.
    Previous,
    /// Toward the max offset.
    Next,
}

impl Direction {
    /// `-1.0` for previous, `1.0` for next.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Previous => -1.0,
            Self::Next => 1.0,
        }
    }
}

/// Touch-drag tracking between drag start and drag end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No finger down.
    #[default]
    Idle,
    /// A drag is in progress.
    Active {
        /// Pointer x relative to the track at drag start.
        start_x: f64,
        /// Track offset at drag start.
        start_offset: f64,
    },
}

impl DragState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Whether a smooth step is still settling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    #[default]
    Idle,
    /// A step toward `target` was issued and the settle delay has not elapsed.
    Animating { target: f64 },
}

impl Motion {
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}
