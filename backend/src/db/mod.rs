// backend/src/db/mod.rs

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::AppResult;

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;

pub const JOBS_FILE: &str = "jobs.json";
pub const STAFF_FILE: &str = "staff.json";
pub const SHIFTS_FILE: &str = "shift_output.json";
pub const AUDIT_FILE: &str = "audit_log.json";
pub const SESSION_FILE: &str = "shift_session.json";

/// Files that hold a JSON array of records.
pub const COLLECTION_FILES: [&str; 4] = [JOBS_FILE, STAFF_FILE, SHIFTS_FILE, AUDIT_FILE];

/// A collection as read from disk: the rows that decoded, plus the raw JSON
/// of those that did not. Writing it back puts the raw rows where they were.
#[derive(Debug, Clone)]
pub struct Records<T> {
    pub rows: Vec<T>,
    undecoded: Vec<(usize, Value)>,
}

impl<T> Records<T> {
    pub fn undecoded(&self) -> impl Iterator<Item = &Value> {
        self.undecoded.iter().map(|(_, v)| v)
    }

    /// String values of `key` on the rows that failed to decode.
    pub fn undecoded_strs<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.undecoded().filter_map(move |v| v.get(key)?.as_str())
    }
}

/// Flat-file store: one JSON document per entity type, always read whole and
/// written whole. No locking; a single local user is assumed.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

pub fn open(data_dir: impl Into<PathBuf>) -> AppResult<Store> {
    let root = data_dir.into();
    fs::create_dir_all(&root)?;
    info!(data_dir = %root.display(), "opened JSON store");
    Ok(Store { root })
}

impl Store {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Loads the records of `file` that decode. Read-only callers use this;
    /// anything that writes the collection back goes through `load_records`.
    pub fn load<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        self.load_records(file).rows
    }

    /// Decodes `file` record by record. A record that does not decode is
    /// logged and kept aside as raw JSON; a missing or non-array file reads
    /// as an empty collection.
    pub fn load_records<T: DeserializeOwned>(&self, file: &str) -> Records<T> {
        let raw: Vec<Value> = self.load_doc(file).unwrap_or_default();
        let mut rows = Vec::with_capacity(raw.len());
        let mut undecoded = Vec::new();
        for (index, value) in raw.into_iter().enumerate() {
            match T::deserialize(&value) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(file, index, error = %e, "skipping undecodable record");
                    undecoded.push((index, value));
                }
            }
        }
        Records { rows, undecoded }
    }

    /// Writes `records` back, re-inserting undecoded rows at their original
    /// positions (clamped to the new length).
    pub fn save_records<T: Serialize>(&self, file: &str, records: &Records<T>) -> AppResult<()> {
        let mut out = records
            .rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;
        for (index, value) in &records.undecoded {
            out.insert((*index).min(out.len()), value.clone());
        }
        self.save_doc(file, &out)?;
        debug!(file, rows = records.rows.len(), kept = records.undecoded.len(), "saved collection");
        Ok(())
    }

    /// Replaces the whole content of `file` with `rows`.
    pub fn save<T: Serialize>(&self, file: &str, rows: &[T]) -> AppResult<()> {
        self.save_doc(file, &rows)?;
        debug!(file, rows = rows.len(), "saved collection");
        Ok(())
    }

    /// Reads a single JSON document, `None` when absent or corrupt.
    pub fn load_doc<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.path(file);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable store file, treating as empty");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt store file, treating as empty");
                None
            }
        }
    }

    /// Writes through a sibling temp file and renames it into place, so a
    /// crash never leaves a truncated document behind.
    pub fn save_doc<T: Serialize + ?Sized>(&self, file: &str, doc: &T) -> AppResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path(file);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_vec_pretty(doc)?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn remove_doc(&self, file: &str) -> AppResult<bool> {
        match fs::remove_file(self.path(file)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
