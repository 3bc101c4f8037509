//! Append-only audit log of contact changes
//!
//! One JSON object per line. Entries are flushed as soon as they are written
//! so an interrupted session keeps everything logged before it.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{ContactsError, ContactsResult};

use super::entry::AuditEntry;

fn io_context(action: &'static str) -> impl Fn(io::Error) -> ContactsError {
    move |e| ContactsError::Io(format!("{} audit log: {}", action, e))
}

/// Writes and reads `audit.log`
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry, creating the file and its directory on first use
    pub fn log(&self, entry: &AuditEntry) -> ContactsResult<()> {
        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir).map_err(io_context("Could not create directory for"))?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(io_context("Could not open"))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(io_context("Could not append to"))
    }

    /// Every entry in the log, oldest first; a missing log is empty
    pub fn read_all(&self) -> ContactsResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_context("Could not read")(e)),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    ContactsError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ContactsResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
