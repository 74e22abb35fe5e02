//! Domain layer for the SwipeDeck plugin.
//!
//! Core types shared by the engine, the application layer and storage,
//! independent of Zellij APIs.
//!
//! - [`error`]: Error types and result aliases
//! - [`card`]: Card and profile model
//! - [`decision`]: Swipe decisions and history records
//! - [`preference`]: Persisted user preferences (theme variant)
//!
//! # Examples
//!
//! ```
//! use swipedeck::domain::{Card, Decision, Profile, SwipeDirection};
//!
//! let card = Card::new("1", Profile { name: "Emma".into(), age: 25, ..Default::default() });
//! assert_eq!(card.headline(), "Emma, 25");
//! assert_eq!(SwipeDirection::Right.decision(), Decision::Like);
//! ```

pub mod card;
pub mod decision;
pub mod error;
pub mod preference;

pub use card::{Card, CardId, Profile};
pub use decision::{Decision, DecisionRecord, SwipeDirection};
pub use error::{Result, SwipeDeckError};
pub use preference::ThemeVariant;
