//! Settings store for handling load/save operations
//!
//! This module provides the ConfigStore struct which handles:
//! - Resolving where the settings file lives
//! - Loading the settings document (defaults when the file is absent)
//! - Writing the settings document back

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the settings file location
pub const SETTINGS_PATH_ENV: &str = "SPACE_INVADERS_SETTINGS";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the given file
    ///
    /// Nothing is touched on disk until [`ConfigStore::save`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        ConfigStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at the standard location
    ///
    /// `$SPACE_INVADERS_SETTINGS` wins, then the platform config directory,
    /// then `./settings.json`.
    pub fn default_location() -> Self {
        let path = std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|p| p.join("space-invaders/settings.json")))
            .unwrap_or_else(|| PathBuf::from("./settings.json"));
        ConfigStore::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the settings file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the settings document
    ///
    /// A missing file yields the default settings. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(&self) -> Result<SettingsDocument, ConfigError> {
        if !self.exists() {
            log::warn!(
                "Settings file {} not found, using defaults",
                self.path.display()
            );
            return Ok(SettingsDocument::default());
        }

        let json = fs::read_to_string(&self.path)?;
        let document: SettingsDocument = serde_json::from_str(&json)?;

        Ok(document)
    }

    /// Save the whole settings document
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn save(&self, document: &SettingsDocument) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Pretty format so the file stays hand-editable
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;

        log::info!("Settings saved to: {}", self.path.display());

        Ok(())
    }
}
