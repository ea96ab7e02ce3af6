//! Task Progress
//!
//! Completion ratios for an event's tasks and the per-event task grouping
//! shown by `task list`.

use serde::Serialize;

use crate::models::{Event, EventId, Task};

/// Title used for tasks whose event no longer exists
pub const UNKNOWN_EVENT: &str = "Unknown Event";

/// Completed versus total tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskProgress {
    pub completed: usize,
    pub total: usize,
}

impl TaskProgress {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|t| t.completed).count(),
            total: tasks.len(),
        }
    }

    /// Unrounded completion percentage; zero when there are no tasks
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    /// Completion percentage rounded for display
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }
}

impl std::fmt::Display for TaskProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} ({}%)",
            self.completed,
            self.total,
            self.rounded_percentage()
        )
    }
}

/// Tasks sharing one owning event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTaskGroup {
    /// `None` for tasks whose event is missing
    pub event_id: Option<EventId>,
    pub event_title: String,
    pub tasks: Vec<Task>,
    pub progress: TaskProgress,
}

/// Group tasks by owning event, in order of first appearance
///
/// Tasks pointing at events that do not exist are collected under a single
/// [`UNKNOWN_EVENT`] group.
pub fn group_tasks_by_event(tasks: Vec<Task>, events: &[Event]) -> Vec<EventTaskGroup> {
    let mut groups: Vec<EventTaskGroup> = Vec::new();

    for task in tasks {
        let owner = events.iter().find(|e| e.id == task.event_id);
        let key = owner.map(|e| e.id);

        match groups.iter_mut().find(|g| g.event_id == key) {
            Some(group) => group.tasks.push(task),
            None => groups.push(EventTaskGroup {
                event_id: key,
                event_title: owner.map_or_else(|| UNKNOWN_EVENT.to_string(), |e| e.title.clone()),
                tasks: vec![task],
                progress: TaskProgress::default(),
            }),
        }
    }

    for group in &mut groups {
        group.progress = TaskProgress::from_tasks(&group.tasks);
    }

    groups
}
