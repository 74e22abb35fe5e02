//! Swipe decisions and the history records kept for undo.

use super::card::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete outcome of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Pass,
    Like,
    SuperLike,
}

impl Decision {
    /// Label shown on the overlay badge for this decision.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "NOPE",
            Self::Like => "LIKE",
            Self::SuperLike => "SUPER LIKE",
        }
    }

    /// Whether the decision expresses interest (and can therefore match).
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Like | Self::SuperLike)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("pass"),
            Self::Like => f.write_str("like"),
            Self::SuperLike => f.write_str("super-like"),
        }
    }
}

/// Direction used by imperative swipes (action buttons / keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
}

impl SwipeDirection {
    #[must_use]
    pub const fn decision(self) -> Decision {
        match self {
            Self::Left => Decision::Pass,
            Self::Right => Decision::Like,
            Self::Up => Decision::SuperLike,
        }
    }
}

impl From<Decision> for SwipeDirection {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Pass => Self::Left,
            Decision::Like => Self::Right,
            Decision::SuperLike => Self::Up,
        }
    }
}

/// A committed decision, retained so the last swipe can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRecord {
    pub card: Card,
    pub decision: Decision,
    /// Unix timestamp of the commit.
    pub decided_at: i64,
}

impl DecisionRecord {
    #[must_use]
    pub fn now(card: Card, decision: Decision) -> Self {
        Self {
            card,
            decision,
            decided_at: chrono::Utc::now().timestamp(),
        }
    }
}
