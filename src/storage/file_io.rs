//! JSON record files
//!
//! A record file is read whole on open and replaced whole on every write. A
//! write goes to a sibling temp file that is renamed over the original, so a
//! crash leaves either the old or the new collection on disk.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::trace;

use crate::error::EventDeskError;

fn storage_err(action: &str, path: &Path, e: impl std::fmt::Display) -> EventDeskError {
    EventDeskError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// `events.json` -> `events.json.tmp`, in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("records"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a JSON file, or `T::default()` when it does not exist
pub fn read_json<T, P>(path: P) -> Result<T, EventDeskError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_err("parse", path, e))
}

/// Replace a JSON file atomically
///
/// Parent directories are created as needed. On failure the original file
/// is untouched and no temp file is left behind.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), EventDeskError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = write_synced(&temp_path, data)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| storage_err("replace", path, e)));

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    } else {
        trace!(path = %path.display(), "wrote record file");
    }

    written
}

fn write_synced<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), EventDeskError> {
    let file = File::create(path).map_err(|e| storage_err("create", path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| storage_err("encode", path, e))?;
    writer.flush().map_err(|e| storage_err("flush", path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("sync", path, e))
}
