//! The data-access contract shared by every backing store
//!
//! Services talk to a `dyn RecordStore<R>` and never learn whether the
//! records live in memory, in a local file, or behind a remote gateway.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::audit::EntityType;
use crate::error::EventDeskResult;
use crate::models::{Event, EventId, Expense, ExpenseId, Task, TaskId};

/// A persistable entity with an integer identity
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: Copy
        + Eq
        + Ord
        + Hash
        + fmt::Display
        + fmt::Debug
        + Send
        + Sync
        + From<i64>
        + Into<i64>;

    /// Table name used by the remote gateway
    const TABLE: &'static str;

    /// Entity type recorded in the audit log
    const ENTITY: EntityType;

    fn id(&self) -> Self::Id;

    fn set_id(&mut self, id: Self::Id);

    /// Short human-readable label (title or description)
    fn label(&self) -> String;
}

impl Record for Event {
    type Id = EventId;
    const TABLE: &'static str = "event";
    const ENTITY: EntityType = EntityType::Event;

    fn id(&self) -> EventId {
        self.id
    }

    fn set_id(&mut self, id: EventId) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl Record for Task {
    type Id = TaskId;
    const TABLE: &'static str = "task";
    const ENTITY: EntityType = EntityType::Task;

    fn id(&self) -> TaskId {
        self.id
    }

    fn set_id(&mut self, id: TaskId) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.title.clone()
    }
}

impl Record for Expense {
    type Id = ExpenseId;
    const TABLE: &'static str = "expense";
    const ENTITY: EntityType = EntityType::Expense;

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn set_id(&mut self, id: ExpenseId) {
        self.id = id;
    }

    fn label(&self) -> String {
        self.description.clone()
    }
}

/// CRUD access to one collection of records
pub trait RecordStore<R: Record>: Send + Sync {
    /// All records, highest identifier first
    fn list(&self) -> EventDeskResult<Vec<R>>;

    /// One record, or `None` if no record has this identifier
    fn get(&self, id: R::Id) -> EventDeskResult<Option<R>>;

    /// Store a new record; the store assigns its identifier
    ///
    /// Whatever identifier `record` carries is ignored.
    fn insert(&self, record: R) -> EventDeskResult<R>;

    /// Overwrite an existing record, returning `None` if it is absent
    fn replace(&self, record: R) -> EventDeskResult<Option<R>>;

    /// Remove a record, returning whether anything was removed
    fn remove(&self, id: R::Id) -> EventDeskResult<bool>;
}
