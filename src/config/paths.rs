//! Path management for the contact book
//!
//! Provides XDG-compliant path resolution for settings, data, and the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACTS_DATA_DIR` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/contact-book` (if set)
//! 3. Platform config directory (`~/.config`, `%APPDATA%`, ...) joined with `contact-book`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ContactsError;

/// Name of the application directory under the platform config directory
const APP_DIR_NAME: &str = "contact-book";

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CONTACTS_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    /// Base directory for all contact book data
    base_dir: PathBuf,
}

impl ContactsPaths {
    /// Create a new ContactsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, ContactsError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ContactsPaths with a custom base directory (used by `--data-dir` and tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contact-book/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/contact-book/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to contacts.json
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ContactsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ContactsError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the contact book has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory for the current platform
fn resolve_default_path() -> Result<PathBuf, ContactsError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
        }
    }

    let dirs = BaseDirs::new()
        .ok_or_else(|| ContactsError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = ContactsPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().join("book"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.contacts_file(),
            temp_dir.path().join("data").join("contacts.json")
        );
    }
}
