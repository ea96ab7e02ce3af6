//! Task service
//!
//! Provides CRUD for tasks, per-event scoping, and the completion toggle.

use tracing::{debug, error, warn};

use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{EventId, NewTask, Task, TaskId, TaskPatch};
use crate::storage::Storage;

/// Service for task management
pub struct TaskService<'a> {
    storage: &'a Storage,
}

impl<'a> TaskService<'a> {
    /// Create a new task service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All tasks, newest first
    pub fn get_all(&self) -> EventDeskResult<Vec<Task>> {
        self.storage.tasks.list().map_err(|e| {
            error!(error = %e, "failed to fetch tasks");
            e
        })
    }

    /// Get a task by ID
    pub fn get_by_id(&self, id: TaskId) -> EventDeskResult<Option<Task>> {
        self.storage.tasks.get(id).map_err(|e| {
            error!(%id, error = %e, "failed to fetch task");
            e
        })
    }

    /// Get a task by ID, treating absence as an error
    pub fn require(&self, id: TaskId) -> EventDeskResult<Task> {
        self.get_by_id(id)?
            .ok_or_else(|| EventDeskError::task_not_found(id.to_string()))
    }

    /// Tasks belonging to one event
    pub fn get_by_event_id(&self, event_id: EventId) -> EventDeskResult<Vec<Task>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.event_id == event_id)
            .collect())
    }

    /// Tasks not yet completed; empty if tasks cannot be read
    pub fn get_active_tasks(&self) -> Vec<Task> {
        match self.storage.tasks.list() {
            Ok(tasks) => tasks.into_iter().filter(|t| !t.completed).collect(),
            Err(e) => {
                warn!(error = %e, "failed to fetch active tasks");
                Vec::new()
            }
        }
    }

    /// Create a new, not-yet-completed task
    pub fn create(&self, input: NewTask) -> EventDeskResult<Task> {
        let task = Task::from_new(input);

        task.validate()
            .map_err(|e| EventDeskError::Validation(e.to_string()))?;

        let task = self.storage.tasks.insert(task)?;
        debug!(id = %task.id, event_id = %task.event_id, "created task");

        self.storage.log_create(&task);

        Ok(task)
    }

    /// Merge the supplied fields into a task
    ///
    /// Returns `None` if the task does not exist.
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> EventDeskResult<Option<Task>> {
        let Some(before) = self.get_by_id(id)? else {
            return Ok(None);
        };

        let mut task = before.clone();
        task.apply(patch);

        task.validate()
            .map_err(|e| EventDeskError::Validation(e.to_string()))?;

        let Some(task) = self.storage.tasks.replace(task)? else {
            return Ok(None);
        };
        debug!(%id, completed = task.completed, "updated task");

        self.storage.log_update(&before, &task);

        Ok(Some(task))
    }

    /// Flip a task's completion flag
    pub fn toggle_completed(&self, id: TaskId) -> EventDeskResult<Option<Task>> {
        let Some(task) = self.get_by_id(id)? else {
            return Ok(None);
        };

        self.update(id, TaskPatch::completed(!task.completed))
    }

    /// Delete a task; `false` when it does not exist or the store refuses
    pub fn delete(&self, id: TaskId) -> bool {
        let existing = match self.storage.tasks.get(id) {
            Ok(Some(task)) => task,
            Ok(None) => return false,
            Err(e) => {
                warn!(%id, error = %e, "failed to delete task");
                return false;
            }
        };

        match self.storage.tasks.remove(id) {
            Ok(true) => {
                debug!(%id, "deleted task");
                self.storage.log_delete(&existing);
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(%id, error = %e, "failed to delete task");
                false
            }
        }
    }
}
