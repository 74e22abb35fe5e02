//! JSON file-based storage backend.
//!
//! Uses atomic file writes (write-to-temp + rename) so the preference file is
//! never left half written.

use crate::domain::error::{Result, SwipeDeckError};
use crate::domain::ThemeVariant;
use crate::storage::backend::Storage;
use crate::storage::models::PreferencesRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    preferences: PreferencesRecord,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: PreferencesRecord::default(),
        }
    }
}

/// JSON file storage backend.
///
/// The whole file is kept in memory and rewritten on every change.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "theme": "dark",
///     "updated_at": 1760600000
///   }
/// }
/// ```
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(
            version = data.version,
            theme = %data.preferences.theme,
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| SwipeDeckError::Storage(format!("failed to parse JSON: {e}")))
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SwipeDeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load_preferences(&self) -> Result<PreferencesRecord> {
        Ok(self.data.preferences)
    }

    fn save_theme(&mut self, theme: ThemeVariant) -> Result<()> {
        let _span = tracing::debug_span!("json_save_theme", theme = %theme).entered();

        if self.data.preferences.theme == theme && self.data.preferences.updated_at.is_some() {
            tracing::debug!("theme unchanged");
            return Ok(());
        }

        self.data.preferences = PreferencesRecord::with_theme(theme);
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
