//! Storage layer for EventDesk
//!
//! Records live behind the [`RecordStore`] trait. Two implementations are
//! provided: [`MemoryStore`] (optionally mirrored to JSON files with atomic
//! writes) and [`RemoteStore`] (a hosted table service reached through a
//! [`Gateway`]). [`Storage`] bundles one store per entity with the audit log.

pub mod file_io;
pub mod gateway;
pub mod init;
pub mod memory;
pub mod record;
pub mod remote;

pub use file_io::{read_json, write_json_atomic};
pub use gateway::{
    FetchParams, FieldError, Gateway, GatewayResponse, OrderBy, RecordResult, SortDirection,
};
pub use init::{initialize_storage, SeedData};
pub use memory::MemoryStore;
pub use record::{Record, RecordStore};
pub use remote::RemoteStore;

use std::sync::Arc;

use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::EventDeskPaths;
use crate::error::EventDeskError;
use crate::models::{Event, Expense, Task};

/// Main storage coordinator that provides access to all record stores
pub struct Storage {
    pub events: Box<dyn RecordStore<Event>>,
    pub tasks: Box<dyn RecordStore<Task>>,
    pub expenses: Box<dyn RecordStore<Expense>>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Assemble storage from individual stores
    pub fn from_stores(
        events: Box<dyn RecordStore<Event>>,
        tasks: Box<dyn RecordStore<Task>>,
        expenses: Box<dyn RecordStore<Expense>>,
    ) -> Self {
        Self {
            events,
            tasks,
            expenses,
            audit: None,
        }
    }

    /// Empty in-memory storage
    pub fn in_memory() -> Self {
        Self::seeded(SeedData::default())
    }

    /// In-memory storage starting from a fixed collection
    pub fn seeded(seed: SeedData) -> Self {
        Self::from_stores(
            Box::new(MemoryStore::seeded(seed.events)),
            Box::new(MemoryStore::seeded(seed.tasks)),
            Box::new(MemoryStore::seeded(seed.expenses)),
        )
    }

    /// File-backed storage under the data directory
    pub fn open(paths: &EventDeskPaths) -> Result<Self, EventDeskError> {
        paths.ensure_directories()?;

        Ok(Self::from_stores(
            Box::new(MemoryStore::file_backed(paths.events_file())?),
            Box::new(MemoryStore::file_backed(paths.tasks_file())?),
            Box::new(MemoryStore::file_backed(paths.expenses_file())?),
        ))
    }

    /// Storage backed by a remote table service
    pub fn remote(gateway: Arc<dyn Gateway>) -> Self {
        Self::from_stores(
            Box::new(RemoteStore::new(gateway.clone())),
            Box::new(RemoteStore::new(gateway.clone())),
            Box::new(RemoteStore::new(gateway)),
        )
    }

    /// Record successful mutations in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Audit a created record
    pub fn log_create<R: Record>(&self, record: &R) {
        self.write_audit(&AuditEntry::created(record));
    }

    /// Audit an updated record
    pub fn log_update<R: Record>(&self, before: &R, after: &R) {
        self.write_audit(&AuditEntry::updated(before, after));
    }

    /// Audit a deleted record
    pub fn log_delete<R: Record>(&self, record: &R) {
        self.write_audit(&AuditEntry::deleted(record));
    }

    /// A failed audit write never fails the mutation it describes
    fn write_audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
