//! Audit logging for contact changes
//!
//! Records every contact creation and update with before/after values
//! in an append-only audit log.
//!
//! - `AuditEntry`: one operation on one contact, with timestamp and snapshots.
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: human-readable summary of what changed between snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{AuditEntry, AuditLogger, generate_diff};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create("alice", &record))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
