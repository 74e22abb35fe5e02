//! Screen mode state machine.
//!
//! ```text
//! Loading ──DeckLoaded──▶ Deck ──match──▶ Match
//!    ▲                     │ ▲              │
//!    └──────reload─────────┘ └───dismiss────┘
//! ```
//!
//! "Exhausted" is not a mode of its own: it is the `Deck` mode with a
//! drained stack, so undo can bring cards back without a transition.

use crate::domain::{CardId, Decision};

/// Details of the match shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    pub card: CardId,
    pub name: String,
    pub decision: Decision,
}

/// What the pane is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenMode {
    /// Waiting for the worker to deliver the deck.
    Loading,

    /// The card stack accepts gestures and action keys.
    Deck,

    /// The match banner is up. Swipe input is ignored until it is dismissed.
    Match(MatchInfo),
}

impl ScreenMode {
    #[must_use]
    pub const fn accepts_swipes(&self) -> bool {
        matches!(self, Self::Deck)
    }
}
