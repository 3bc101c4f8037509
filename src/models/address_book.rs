//! Address book model
//!
//! A name-keyed collection of records. Lookups are exact-text; iteration
//! follows insertion order.

use std::collections::HashMap;

use super::record::Record;

/// All contacts, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    data: HashMap<String, Record>,
    /// Insertion order of the keys in `data`
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already there
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.data.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Exact-name lookup
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.data.get(name)
    }

    /// Exact-name lookup for in-place edits
    ///
    /// The name itself is immutable on `Record`, so the key invariant holds.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.data.get_mut(name)
    }

    /// Remove a record; missing names are ignored
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.data.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// All records in insertion order
    pub fn all_records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.data.get(key))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
