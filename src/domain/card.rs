//! Profile card domain model.
//!
//! A [`Card`] is the unit the swipe engine moves around: a stable identifier
//! plus an opaque [`Profile`] payload. The only field that may change once a
//! card is on screen is its photo cursor, used by photo-carousel cards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a card within a deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Profile data shown on a card.
///
/// The engine never inspects this; it exists for the renderer and for outcome
/// collaborators that look cards up by id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub verified: bool,
}

/// A profile card in the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub profile: Profile,
    /// Index of the photo currently shown. Always `< photos.len()` when the
    /// profile has photos, `0` otherwise.
    #[serde(default, skip_serializing)]
    pub photo_index: usize,
}

impl Card {
    /// Creates a card showing its first photo.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipedeck::domain::{Card, Profile};
    ///
    /// let card = Card::new("emma", Profile { name: "Emma".into(), age: 25, ..Default::default() });
    /// assert_eq!(card.id.as_str(), "emma");
    /// assert_eq!(card.photo_index, 0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: CardId::new(id),
            profile,
            photo_index: 0,
        }
    }

    /// Advances the photo cursor, wrapping to the first photo.
    ///
    /// Returns `false` when the profile has fewer than two photos.
    pub fn next_photo(&mut self) -> bool {
        let count = self.profile.photos.len();
        if count < 2 {
            return false;
        }
        self.photo_index = (self.photo_index + 1) % count;
        true
    }

    #[must_use]
    pub fn current_photo(&self) -> Option<&str> {
        self.profile.photos.get(self.photo_index).map(String::as_str)
    }

    /// `"Name, age"` headline used by the renderer and match banner.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{}, {}", self.profile.name, self.profile.age)
    }
}
