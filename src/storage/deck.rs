//! Deck files: the card source behind the engine's `load`.
//!
//! A deck is JSON, either an object with a `cards` array or a bare array of
//! cards. When no deck file is configured the built-in seed deck is used.

use crate::domain::error::{Result, SwipeDeckError};
use crate::domain::Card;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const SEED_DECK: &str = include_str!("../../decks/seed.json");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Wrapped {
        #[serde(default)]
        #[allow(dead_code)]
        version: Option<u32>,
        cards: Vec<Card>,
    },
    Bare(Vec<Card>),
}

impl DeckFile {
    fn into_cards(self) -> Vec<Card> {
        match self {
            Self::Wrapped { cards, .. } | Self::Bare(cards) => cards,
        }
    }
}

/// Parses deck JSON and validates card ids.
///
/// # Errors
///
/// Returns [`SwipeDeckError::Deck`] if the JSON is malformed, a card has an
/// empty id, or two cards share an id.
///
/// # Examples
///
/// ```
/// use swipedeck::storage::deck::parse_deck;
///
/// let cards = parse_deck(r#"[{"id":"a","profile":{"name":"Ana","age":30}}]"#)?;
/// assert_eq!(cards[0].headline(), "Ana, 30");
/// # Ok::<(), swipedeck::SwipeDeckError>(())
/// ```
pub fn parse_deck(json: &str) -> Result<Vec<Card>> {
    let deck: DeckFile = serde_json::from_str(json)
        .map_err(|e| SwipeDeckError::Deck(format!("failed to parse deck: {e}")))?;
    let cards = deck.into_cards();

    let mut seen = HashSet::with_capacity(cards.len());
    for card in &cards {
        if card.id.as_str().trim().is_empty() {
            return Err(SwipeDeckError::Deck("card with empty id".into()));
        }
        if !seen.insert(&card.id) {
            return Err(SwipeDeckError::Deck(format!("duplicate card id '{}'", card.id)));
        }
    }

    Ok(cards)
}

/// Built-in deck shipped with the plugin.
///
/// # Errors
///
/// Only fails if the embedded asset is malformed.
pub fn seed_deck() -> Result<Vec<Card>> {
    parse_deck(SEED_DECK)
}

/// Loads cards from `path`, or the seed deck when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_deck`].
pub fn load_deck(path: Option<&Path>) -> Result<Vec<Card>> {
    let _span = tracing::debug_span!("load_deck", path = ?path).entered();

    let cards = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                SwipeDeckError::Deck(format!("failed to read {}: {e}", path.display()))
            })?;
            parse_deck(&contents)?
        }
        None => seed_deck()?,
    };

    tracing::debug!(count = cards.len(), "deck loaded");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_deck_is_valid() {
        let cards = seed_deck().unwrap();
        assert!(cards.len() >= 3);
        assert!(cards.iter().all(|c| !c.profile.photos.is_empty()));
    }

    #[test]
    fn accepts_wrapped_and_bare_forms() {
        let wrapped = r#"{"version":1,"cards":[{"id":"a","profile":{"name":"A","age":20}}]}"#;
        let bare = r#"[{"id":"a","profile":{"name":"A","age":20}}]"#;
        assert_eq!(parse_deck(wrapped).unwrap(), parse_deck(bare).unwrap());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[{"id":"a","profile":{"name":"A","age":20}},{"id":"a","profile":{"name":"B","age":21}}]"#;
        let err = parse_deck(json).unwrap_err();
        assert!(err.to_string().contains("duplicate card id 'a'"));
    }

    #[test]
    fn rejects_empty_ids() {
        let json = r#"[{"id":" ","profile":{"name":"A","age":20}}]"#;
        assert!(matches!(parse_deck(json), Err(SwipeDeckError::Deck(_))));
    }

    #[test]
    fn missing_file_is_a_deck_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_deck(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, SwipeDeckError::Deck(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"[{"id":"z","profile":{"name":"Zoe","age":31}}]"#).unwrap();

        let cards = load_deck(Some(&path)).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id.as_str(), "z");
    }
}
