//! Storage layer: deck files and the persisted theme preference.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for preference backends
//! - `json`: JSON file-based preference storage
//! - `deck`: Deck file parsing and the built-in seed deck
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod deck;
pub mod json;
pub mod models;

pub use backend::Storage;
pub use deck::load_deck;
pub use json::JsonStorage;
pub use models::PreferencesRecord;
