//! Storage backend abstraction.
//!
//! The trait is deliberately small: it only exposes what the worker thread
//! needs to restore and persist preferences.

use crate::domain::error::Result;
use crate::domain::ThemeVariant;
use crate::storage::models::PreferencesRecord;

/// Abstraction over preference persistence backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use swipedeck::domain::ThemeVariant;
/// use swipedeck::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/preferences.json"))?;
/// storage.save_theme(ThemeVariant::Dark)?;
/// assert_eq!(storage.load_preferences()?.theme, ThemeVariant::Dark);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Returns stored preferences, or defaults when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load_preferences(&self) -> Result<PreferencesRecord>;

    /// Persists the chosen theme variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn save_theme(&mut self, theme: ThemeVariant) -> Result<()>;
}
