//! Ordered card stack with a logical front and physically exiting cards.

use crate::domain::{Card, CardId};
use std::collections::VecDeque;

/// Cards awaiting a decision, front first, plus cards whose exit animation is
/// still running.
///
/// A committed card leaves `pending` immediately, so the next card becomes the
/// logical front before the animation ends. It stays retrievable through
/// [`CardStack::get`] until the presenter reports the exit finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStack {
    pending: VecDeque<Card>,
    exiting: Vec<Card>,
}

impl CardStack {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            pending: cards.into_iter().collect(),
            exiting: Vec::new(),
        }
    }

    /// Number of cards still awaiting a decision.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// `true` when no card awaits a decision (exits may still be running).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// `true` when nothing is pending and every exit has finished.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.exiting.is_empty()
    }

    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.pending.front()
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut Card> {
        self.pending.front_mut()
    }

    #[must_use]
    pub fn is_front(&self, id: &CardId) -> bool {
        self.front().is_some_and(|card| &card.id == id)
    }

    /// Pending cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.pending.iter()
    }

    /// Cards that have been decided but are still animating out.
    #[must_use]
    pub fn exiting(&self) -> &[Card] {
        &self.exiting
    }

    /// Looks a card up by id among pending and exiting cards.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.pending
            .iter()
            .chain(self.exiting.iter())
            .find(|card| &card.id == id)
    }

    /// Moves the front card to the exiting list and returns its id.
    pub(crate) fn advance(&mut self) -> Option<CardId> {
        let card = self.pending.pop_front()?;
        let id = card.id.clone();
        self.exiting.push(card);
        Some(id)
    }

    /// Physically removes a card whose exit animation finished.
    pub(crate) fn remove_exiting(&mut self, id: &CardId) -> Option<Card> {
        let pos = self.exiting.iter().position(|card| &card.id == id)?;
        Some(self.exiting.remove(pos))
    }

    /// Puts a previously decided card back in front.
    ///
    /// If the card is still animating out it is pulled from the exiting list
    /// first, so it is never present twice.
    pub(crate) fn restore_front(&mut self, card: Card) {
        self.remove_exiting(&card.id);
        self.pending.push_front(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Profile;

    fn stack(ids: &[&str]) -> CardStack {
        CardStack::new(ids.iter().map(|id| Card::new(*id, Profile::default())))
    }

    fn pending_ids(stack: &CardStack) -> Vec<&str> {
        stack.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn advance_keeps_card_retrievable_until_removed() {
        let mut s = stack(&["a", "b", "c"]);
        let id = s.advance().unwrap();

        assert_eq!(id.as_str(), "a");
        assert_eq!(pending_ids(&s), ["b", "c"]);
        assert!(s.get(&id).is_some());
        assert!(!s.is_drained());

        s.remove_exiting(&id);
        assert!(s.get(&id).is_none());
    }

    #[test]
    fn drained_only_after_exits_finish() {
        let mut s = stack(&["a"]);
        let id = s.advance().unwrap();
        assert!(s.is_empty());
        assert!(!s.is_drained());

        s.remove_exiting(&id);
        assert!(s.is_drained());
        assert!(s.advance().is_none());
    }

    #[test]
    fn restore_front_pulls_from_exiting() {
        let mut s = stack(&["a", "b"]);
        s.advance();
        let card = s.exiting()[0].clone();

        s.restore_front(card);

        assert_eq!(pending_ids(&s), ["a", "b"]);
        assert!(s.exiting().is_empty());
    }
}
