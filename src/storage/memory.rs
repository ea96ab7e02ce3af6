//! In-process record store
//!
//! Holds records in a lock-guarded map. A store can optionally be backed by a
//! JSON file, in which case every mutation rewrites the file atomically.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{EventDeskError, EventDeskResult};

use super::file_io::{read_json, write_json_atomic};
use super::record::{Record, RecordStore};

/// Record store kept in memory, optionally mirrored to a JSON file
pub struct MemoryStore<R: Record> {
    path: Option<PathBuf>,
    data: RwLock<BTreeMap<i64, R>>,
}

impl<R: Record> MemoryStore<R> {
    /// Create an empty, purely in-memory store
    pub fn new() -> Self {
        Self {
            path: None,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create an in-memory store pre-populated with records
    ///
    /// Records keep the identifiers they carry.
    pub fn seeded(records: impl IntoIterator<Item = R>) -> Self {
        let data = records
            .into_iter()
            .map(|r| (r.id().into(), r))
            .collect::<BTreeMap<i64, R>>();

        Self {
            path: None,
            data: RwLock::new(data),
        }
    }

    /// Open a store backed by a JSON file, loading whatever it holds
    ///
    /// A missing file yields an empty store; the file is created on the first
    /// mutation.
    pub fn file_backed(path: PathBuf) -> EventDeskResult<Self> {
        let records: Vec<R> = read_json(&path)?;
        debug!(
            table = R::TABLE,
            count = records.len(),
            path = %path.display(),
            "loaded records"
        );

        let store = Self::seeded(records);
        Ok(Self {
            path: Some(path),
            data: store.data,
        })
    }

    /// Write the current contents to the backing file, if any
    fn persist(&self, data: &BTreeMap<i64, R>) -> EventDeskResult<()> {
        if let Some(path) = &self.path {
            let records: Vec<&R> = data.values().collect();
            write_json_atomic(path, &records)?;
        }
        Ok(())
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn list(&self) -> EventDeskResult<Vec<R>> {
        let data = self
            .data
            .read()
            .map_err(|e| EventDeskError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().rev().cloned().collect())
    }

    fn get(&self, id: R::Id) -> EventDeskResult<Option<R>> {
        let data = self
            .data
            .read()
            .map_err(|e| EventDeskError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let key: i64 = id.into();
        Ok(data.get(&key).cloned())
    }

    fn insert(&self, mut record: R) -> EventDeskResult<R> {
        let mut data = self
            .data
            .write()
            .map_err(|e| EventDeskError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let next = data.keys().next_back().map_or(1, |max| max + 1);
        record.set_id(R::Id::from(next));
        data.insert(next, record.clone());

        if let Err(e) = self.persist(&data) {
            data.remove(&next);
            return Err(e);
        }

        Ok(record)
    }

    fn replace(&self, record: R) -> EventDeskResult<Option<R>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| EventDeskError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key: i64 = record.id().into();
        let previous = match data.get_mut(&key) {
            Some(slot) => std::mem::replace(slot, record.clone()),
            None => return Ok(None),
        };

        if let Err(e) = self.persist(&data) {
            data.insert(key, previous);
            return Err(e);
        }

        Ok(Some(record))
    }

    fn remove(&self, id: R::Id) -> EventDeskResult<bool> {
        let mut data = self
            .data
            .write()
            .map_err(|e| EventDeskError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let key: i64 = id.into();
        let Some(previous) = data.remove(&key) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&data) {
            data.insert(key, previous);
            return Err(e);
        }

        Ok(true)
    }
}
