//! Contact Book - terminal contact manager
//!
//! This library provides the core of the `contacts` command-line tool: a
//! name-keyed address book of validated phone numbers and birthdays, the
//! handlers behind each shell command, and JSON persistence.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Field values, contact records and the address book
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging of contact changes
//! - `reports`: Upcoming birthdays
//! - `commands`: Command parsing and per-command handlers
//! - `shell`: The interactive read-eval-print loop
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{ContactsPaths, Settings};
//! use contact_book::storage::Storage;
//!
//! let paths = ContactsPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let book = storage.load()?;
//! ```

pub mod audit;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod shell;
pub mod storage;

pub use error::{ContactsError, ContactsResult};
