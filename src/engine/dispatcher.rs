//! Outcome delivery to the host's collaborators.

use super::stack::CardStack;
use crate::domain::{CardId, Decision, Result};

/// Collaborator notified about committed decisions.
///
/// Each decision callback runs after the card left the pending stack but
/// while it is still retrievable with [`CardStack::get`]. Errors are logged
/// and never stop the stack from advancing.
pub trait SwipeCallbacks {
    fn on_pass(&mut self, card: &CardId, stack: &CardStack) -> Result<()>;

    fn on_like(&mut self, card: &CardId, stack: &CardStack) -> Result<()>;

    fn on_super_like(&mut self, card: &CardId, stack: &CardStack) -> Result<()>;

    /// Called once when the last card has finished exiting.
    fn on_exhausted(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Callbacks that ignore every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallbacks;

impl SwipeCallbacks for NoCallbacks {
    fn on_pass(&mut self, _card: &CardId, _stack: &CardStack) -> Result<()> {
        Ok(())
    }

    fn on_like(&mut self, _card: &CardId, _stack: &CardStack) -> Result<()> {
        Ok(())
    }

    fn on_super_like(&mut self, _card: &CardId, _stack: &CardStack) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutcomeDispatcher {
    exhausted_notified: bool,
}

impl OutcomeDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the callback matching `decision`. Returns `false` if it failed.
    pub fn dispatch<C: SwipeCallbacks>(
        &self,
        callbacks: &mut C,
        decision: Decision,
        card: &CardId,
        stack: &CardStack,
    ) -> bool {
        let result = match decision {
            Decision::Pass => callbacks.on_pass(card, stack),
            Decision::Like => callbacks.on_like(card, stack),
            Decision::SuperLike => callbacks.on_super_like(card, stack),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(card = %card, decision = %decision, error = %e, "outcome callback failed");
                false
            }
        }
    }

    /// Fires `on_exhausted` if the stack is drained and it has not fired
    /// since the last [`rearm`](Self::rearm). Returns whether it fired.
    pub fn notify_exhausted<C: SwipeCallbacks>(&mut self, callbacks: &mut C, stack: &CardStack) -> bool {
        if self.exhausted_notified || !stack.is_drained() {
            return false;
        }
        self.exhausted_notified = true;

        if let Err(e) = callbacks.on_exhausted() {
            tracing::warn!(error = %e, "exhausted callback failed");
        }
        true
    }

    /// Allows `on_exhausted` to fire again, after a reload or undo.
    pub fn rearm(&mut self) {
        self.exhausted_notified = false;
    }

    /// Suppresses `on_exhausted` until the next [`rearm`](Self::rearm).
    pub fn disarm(&mut self) {
        self.exhausted_notified = true;
    }
}
