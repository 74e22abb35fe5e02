//! The plugin's swipe callbacks.
//!
//! Callbacks run inside the engine, so they cannot touch `AppState`
//! directly. [`DeckReactions`] records what the UI should react to and the
//! event handler drains it after every engine call.

use super::matching::MatchOracle;
use crate::domain::{CardId, Decision, Result, SwipeDeckError};
use crate::engine::{CardStack, SwipeCallbacks};

/// Something the UI should respond to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Matched {
        card: CardId,
        name: String,
        decision: Decision,
    },
    Exhausted,
}

/// Running totals for the current deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passes: usize,
    pub likes: usize,
    pub super_likes: usize,
    pub matches: usize,
}

pub struct DeckReactions {
    oracle: Box<dyn MatchOracle>,
    pending: Vec<Reaction>,
    tally: Tally,
}

impl std::fmt::Debug for DeckReactions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckReactions")
            .field("pending", &self.pending)
            .field("tally", &self.tally)
            .finish_non_exhaustive()
    }
}

impl DeckReactions {
    #[must_use]
    pub fn new(oracle: Box<dyn MatchOracle>) -> Self {
        Self {
            oracle,
            pending: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// Takes every reaction recorded since the last call.
    pub fn drain(&mut self) -> Vec<Reaction> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    pub fn reset_tally(&mut self) {
        self.tally = Tally::default();
    }

    pub fn set_oracle(&mut self, oracle: Box<dyn MatchOracle>) {
        self.oracle = oracle;
    }

    fn consider(&mut self, id: &CardId, stack: &CardStack, decision: Decision) -> Result<()> {
        let card = stack
            .get(id)
            .ok_or_else(|| SwipeDeckError::Callback(format!("card {id} is not in the stack")))?;

        if self.oracle.is_match(card, decision) {
            self.tally.matches += 1;
            tracing::info!(card = %id, decision = %decision, "match");
            self.pending.push(Reaction::Matched {
                card: id.clone(),
                name: card.profile.name.clone(),
                decision,
            });
        }
        Ok(())
    }
}

impl SwipeCallbacks for DeckReactions {
    fn on_pass(&mut self, card: &CardId, _stack: &CardStack) -> Result<()> {
        self.tally.passes += 1;
        tracing::debug!(card = %card, "passed");
        Ok(())
    }

    fn on_like(&mut self, card: &CardId, stack: &CardStack) -> Result<()> {
        self.tally.likes += 1;
        self.consider(card, stack, Decision::Like)
    }

    fn on_super_like(&mut self, card: &CardId, stack: &CardStack) -> Result<()> {
        self.tally.super_likes += 1;
        self.consider(card, stack, Decision::SuperLike)
    }

    fn on_exhausted(&mut self) -> Result<()> {
        self.pending.push(Reaction::Exhausted);
        Ok(())
    }
}
