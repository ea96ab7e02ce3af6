//! Task CLI commands
//!
//! Implements CLI commands for task management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_task_details, format_task_groups};
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{EventId, NewTask, TaskId, TaskPatch};
use crate::reports::{group_tasks_by_event, UNKNOWN_EVENT};
use crate::services::{EventService, TaskService};
use crate::storage::Storage;

use super::parse_datetime;

/// Task subcommands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks grouped by event
    List {
        /// Only tasks for this event
        #[arg(short, long)]
        event: Option<EventId>,
        /// Only tasks not yet completed
        #[arg(short, long)]
        active: bool,
    },
    /// Show task details
    Show {
        /// Task ID (e.g. 4 or task-4)
        id: TaskId,
    },
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Owning event ID
        #[arg(short, long)]
        event: EventId,
        /// Due date (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        due: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit a task
    Edit {
        /// Task ID
        id: TaskId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New due date
        #[arg(short, long)]
        due: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Move the task to another event
        #[arg(short, long)]
        event: Option<EventId>,
    },
    /// Flip a task between done and not done
    Toggle {
        /// Task ID
        id: TaskId,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a task command
pub fn handle_task_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TaskCommands,
) -> EventDeskResult<()> {
    let service = TaskService::new(storage);
    let events = EventService::new(storage);

    match cmd {
        TaskCommands::List { event, active } => {
            let mut tasks = match event {
                Some(event_id) => service.get_by_event_id(event_id)?,
                None => service.get_all()?,
            };
            if active {
                tasks.retain(|t| !t.completed);
            }

            let groups = group_tasks_by_event(tasks, &events.get_all()?);
            println!("{}", format_task_groups(&groups, settings));
        }

        TaskCommands::Show { id } => {
            let task = service.require(id)?;
            let title = events
                .get_by_id(task.event_id)?
                .map_or_else(|| UNKNOWN_EVENT.to_string(), |e| e.title);
            print!("{}", format_task_details(&task, &title, settings));
        }

        TaskCommands::Add {
            title,
            event,
            due,
            description,
        } => {
            let task = service.create(NewTask {
                title,
                description: description.unwrap_or_default(),
                due_date: parse_datetime(&due)?,
                event_id: event,
            })?;

            println!("Created task: {}", task.title);
            println!("  ID:    {}", task.id);
            println!("  Event: {}", task.event_id);
        }

        TaskCommands::Edit {
            id,
            title,
            due,
            description,
            event,
        } => {
            if title.is_none() && due.is_none() && description.is_none() && event.is_none() {
                println!("No changes specified. Use --title, --due, --description, or --event.");
                return Ok(());
            }

            let patch = TaskPatch {
                title,
                description,
                due_date: due.as_deref().map(parse_datetime).transpose()?,
                event_id: event,
                completed: None,
            };

            let task = service
                .update(id, patch)?
                .ok_or_else(|| EventDeskError::task_not_found(id.to_string()))?;
            println!("Updated task: {} ({})", task.title, task.id);
        }

        TaskCommands::Toggle { id } => {
            let task = service
                .toggle_completed(id)?
                .ok_or_else(|| EventDeskError::task_not_found(id.to_string()))?;
            println!("{}", task);
        }

        TaskCommands::Delete { id, force } => {
            let task = service.require(id)?;

            if !force {
                println!("This will permanently delete task '{}' ({}).", task.title, task.id);
                println!();
                println!("To proceed, run again with --force flag:");
                println!("  eventdesk task delete {} --force", id.value());
                return Ok(());
            }

            if !service.delete(id) {
                return Err(EventDeskError::Storage(format!("Failed to delete task {}", id)));
            }
            println!("Deleted task: {}", task.title);
        }
    }

    Ok(())
}
