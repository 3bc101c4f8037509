//! Reports module for the contact book
//!
//! Provides read-only reports computed from the address book.

pub mod upcoming_birthdays;

pub use upcoming_birthdays::{UpcomingBirthday, UpcomingBirthdaysReport};
