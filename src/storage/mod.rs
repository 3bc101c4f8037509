//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus access to the audit log.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ContactsPaths;
use crate::config::settings::Settings;
use crate::error::ContactsError;
use crate::models::{AddressBook, Record};

/// Storage coordinator: the contact file plus the optional audit log
pub struct Storage {
    paths: ContactsPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ContactsPaths, settings: &Settings) -> Result<Self, ContactsError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactsPaths {
        &self.paths
    }

    /// Load the address book from disk
    pub fn load(&self) -> Result<AddressBook, ContactsError> {
        self.contacts.load()
    }

    /// Save the address book to disk
    pub fn save(&self, book: &AddressBook) -> Result<(), ContactsError> {
        self.contacts.save(book)
    }

    /// Audit log, when enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a contact creation in the audit log
    pub fn log_create(&self, record: &Record) -> Result<(), ContactsError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(record.name().as_str(), record)),
            None => Ok(()),
        }
    }

    /// Record a contact update in the audit log
    pub fn log_update(&self, before: &Record, after: &Record) -> Result<(), ContactsError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::update(after.name().as_str(), before, after)),
            None => Ok(()),
        }
    }
}
