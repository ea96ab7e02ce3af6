//! Task model
//!
//! A to-do item scoped to one event. Progress on an event is derived from the
//! `completed` flags of its tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EventId, TaskId};

/// A task belonging to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Short title
    pub title: String,

    /// Longer description
    #[serde(default)]
    pub description: String,

    /// Due date; required when created through the service, but older
    /// records may lack it
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,

    /// Owning event
    pub event_id: EventId,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build an unsaved, not-yet-completed task; the store assigns the id
    pub fn from_new(input: NewTask) -> Self {
        Self {
            id: TaskId::new(0),
            title: input.title.trim().to_string(),
            description: input.description,
            due_date: Some(input.due_date),
            event_id: input.event_id,
            completed: false,
        }
    }

    /// Merge the supplied fields of a patch
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(event_id) = patch.event_id {
            self.event_id = event_id;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    /// Validate the task
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] {}", mark, self.title)
    }
}

/// Input for creating a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub event_id: EventId,
}

/// Partial update for a task; only `Some` fields change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub event_id: Option<EventId>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that only sets the completion flag
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Validation errors for tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title is required"),
        }
    }
}

impl std::error::Error for TaskValidationError {}
