//! User settings for the contact book
//!
//! Manages user preferences: the birthday reminder window, audit logging,
//! and the shell prompt.

use serde::{Deserialize, Serialize};

use super::paths::ContactsPaths;
use crate::error::ContactsError;

/// User settings for the contact book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Whether contact changes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Prompt printed before each command is read
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_birthday_window_days() -> u32 {
    7
}

fn default_audit_enabled() -> bool {
    true
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            birthday_window_days: default_birthday_window_days(),
            audit_enabled: default_audit_enabled(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ContactsPaths) -> Result<Self, ContactsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContactsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactsPaths) -> Result<(), ContactsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ContactsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
