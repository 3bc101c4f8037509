//! Contact repository for JSON storage
//!
//! Loads and saves the whole address book to contacts.json.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::ContactsError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Serializable address book, records in address book order
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContactData {
    contacts: Vec<Record>,
}

/// Repository for address book persistence
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the address book; a missing file yields an empty book
    ///
    /// Phones and birthdays are re-validated while parsing, so a file holding
    /// an invalid value is rejected as a whole.
    pub fn load(&self) -> Result<AddressBook, ContactsError> {
        let file_data: ContactData = read_json(&self.path)?;
        let book: AddressBook = file_data.contacts.into_iter().collect();

        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    /// Save the whole address book
    pub fn save(&self, book: &AddressBook) -> Result<(), ContactsError> {
        let file_data = ContactData {
            contacts: book.all_records().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)?;

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book"
        );
        Ok(())
    }
}
