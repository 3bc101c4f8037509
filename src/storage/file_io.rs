//! JSON file helpers
//!
//! Writes go through a sibling temp file and a rename, so a crash mid-save
//! leaves the previous file intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ContactsError, ContactsResult};

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ContactsError {
    ContactsError::Storage(format!("Could not {} {}: {}", action, path.display(), err))
}

/// Deserialize `path`, or return `T::default()` when it does not exist
pub fn read_json<T, P>(path: P) -> ContactsResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Serialize `data` to `path` as pretty JSON, replacing the file in one step
pub fn write_json_atomic<T, P>(path: P, data: &T) -> ContactsResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create", dir, e))?;
    }

    // Same directory as the target, or the rename is not atomic
    let temp_path = path.with_extension("json.tmp");
    let mut writer = File::create(&temp_path)
        .map(BufWriter::new)
        .map_err(|e| storage_error("create", &temp_path, e))?;

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", &temp_path, e))?;
    writer
        .flush()
        .and_then(|()| writer.get_ref().sync_all())
        .map_err(|e| storage_error("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}
