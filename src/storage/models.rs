//! Storage record models for the persistence layer.
//!
//! Records are kept separate from domain types so the on-disk format can grow
//! fields without touching the engine.

use crate::domain::ThemeVariant;
use serde::{Deserialize, Serialize};

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreferencesRecord {
    /// Color scheme chosen by the user.
    #[serde(default)]
    pub theme: ThemeVariant,

    /// Unix timestamp of the last change, `None` if never changed.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl PreferencesRecord {
    /// Creates a record for `theme`, stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipedeck::domain::ThemeVariant;
    /// use swipedeck::storage::PreferencesRecord;
    ///
    /// let record = PreferencesRecord::with_theme(ThemeVariant::Dark);
    /// assert_eq!(record.theme, ThemeVariant::Dark);
    /// assert!(record.updated_at.is_some());
    /// ```
    #[must_use]
    pub fn with_theme(theme: ThemeVariant) -> Self {
        Self {
            theme,
            updated_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}
