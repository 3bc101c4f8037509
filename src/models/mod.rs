//! Core data models for the contact book
//!
//! This module contains the validated field values, the contact record, and
//! the address book that owns all records.

pub mod address_book;
pub mod field;
pub mod record;

pub use address_book::AddressBook;
pub use field::{Birthday, FieldValidationError, Name, Phone};
pub use record::Record;
