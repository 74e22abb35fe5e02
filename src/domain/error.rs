//! Error types for the SwipeDeck plugin.
//!
//! This module defines the centralized error type [`SwipeDeckError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with the
//! `thiserror` crate.
//!
//! Nothing in the swipe engine is fatal: errors raised by outcome callbacks are
//! logged and swallowed by the dispatcher, and storage errors travel back to the
//! plugin as worker responses.

use thiserror::Error;

/// The main error type for SwipeDeck operations.
///
/// # Examples
///
/// ```
/// use swipedeck::SwipeDeckError;
///
/// fn parse_rate(raw: &str) -> Result<f64, SwipeDeckError> {
///     raw.parse::<f64>()
///         .map_err(|e| SwipeDeckError::Config(format!("match_rate: {e}")))
/// }
///
/// assert!(parse_rate("0.5").is_ok());
/// assert!(parse_rate("often").is_err());
/// ```
#[derive(Debug, Error)]
pub enum SwipeDeckError {
    /// Reading or writing the preference file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A deck file could not be parsed or contained invalid cards.
    #[error("Deck error: {0}")]
    Deck(String),

    /// An outcome collaborator rejected a decision.
    ///
    /// Raised by [`SwipeCallbacks`](crate::engine::SwipeCallbacks) implementations.
    /// The dispatcher logs it and keeps advancing the stack.
    #[error("Callback error: {0}")]
    Callback(String),
}

/// A specialized `Result` type for SwipeDeck operations.
pub type Result<T> = std::result::Result<T, SwipeDeckError>;
