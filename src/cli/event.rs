//! Event CLI commands
//!
//! Implements CLI commands for event management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_event_details, format_event_list};
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{EventId, EventPatch, EventStatus, NewEvent};
use crate::reports::BudgetSummary;
use crate::services::{EventService, TaskService};
use crate::storage::Storage;

use super::{parse_datetime, parse_money};

/// Event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// List events, optionally filtered
    List {
        /// Case-insensitive text to look for in title or description
        #[arg(short, long)]
        search: Option<String>,
        /// Only events with this status (planning, in-progress, completed, cancelled)
        #[arg(long)]
        status: Option<EventStatus>,
    },
    /// Show event details
    Show {
        /// Event ID (e.g. 3 or evt-3)
        id: EventId,
    },
    /// Create a new event
    Add {
        /// Event title
        title: String,
        /// Event date (YYYY-MM-DD or RFC 3339)
        #[arg(short, long)]
        date: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Budget amount (e.g. "5000" or "5,000.00")
        #[arg(short, long, default_value = "0")]
        budget: String,
        /// Initial status (defaults to planning)
        #[arg(long)]
        status: Option<EventStatus>,
    },
    /// Edit an event
    Edit {
        /// Event ID
        id: EventId,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New budget
        #[arg(short, long)]
        budget: Option<String>,
        /// New status
        #[arg(long)]
        status: Option<EventStatus>,
    },
    /// Delete an event
    Delete {
        /// Event ID
        id: EventId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show an event's budget position
    Budget {
        /// Event ID
        id: EventId,
    },
}

/// Handle an event command
pub fn handle_event_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EventCommands,
) -> EventDeskResult<()> {
    let service = EventService::new(storage);

    match cmd {
        EventCommands::List { search, status } => {
            let events = service.search(search.as_deref(), status)?;
            println!("{}", format_event_list(&events, settings));
        }

        EventCommands::Show { id } => {
            let event = service.require(id)?;
            let tasks = TaskService::new(storage).get_by_event_id(id)?;
            let budget = BudgetSummary::for_event(storage, &event);
            print!("{}", format_event_details(&event, &budget, &tasks, settings));
        }

        EventCommands::Add {
            title,
            date,
            description,
            budget,
            status,
        } => {
            let event = service.create(NewEvent {
                title,
                date: parse_datetime(&date)?,
                description: description.unwrap_or_default(),
                budget: parse_money(&budget)?,
                status,
            })?;

            println!("Created event: {}", event.title);
            println!("  ID:     {}", event.id);
            println!("  Date:   {}", event.date.format(&settings.datetime_format));
            println!("  Status: {}", event.status);
            println!(
                "  Budget: {}",
                event.budget.format_with_symbol(&settings.currency_symbol)
            );
        }

        EventCommands::Edit {
            id,
            title,
            date,
            description,
            budget,
            status,
        } => {
            let patch = EventPatch {
                title,
                date: date.as_deref().map(parse_datetime).transpose()?,
                description,
                budget: budget.as_deref().map(parse_money).transpose()?,
                status,
            };

            if patch.is_empty() {
                println!(
                    "No changes specified. Use --title, --date, --description, --budget, or --status."
                );
                return Ok(());
            }

            let event = service
                .update(id, patch)?
                .ok_or_else(|| EventDeskError::event_not_found(id.to_string()))?;
            println!("Updated event: {} ({})", event.title, event.id);
        }

        EventCommands::Delete { id, force } => {
            let event = service.require(id)?;

            if !force {
                println!("This will permanently delete '{}' ({}).", event.title, event.id);
                println!("Its tasks and expenses are kept and will show under 'Unknown Event'.");
                println!();
                println!("To proceed, run again with --force flag:");
                println!("  eventdesk event delete {} --force", id.value());
                return Ok(());
            }

            if !service.delete(id) {
                return Err(EventDeskError::Storage(format!(
                    "Failed to delete event {}",
                    id
                )));
            }
            println!("Deleted event: {}", event.title);
        }

        EventCommands::Budget { id } => {
            let event = service.require(id)?;
            let budget = BudgetSummary::for_event(storage, &event);

            println!("Budget for: {}", event.title);
            print!("{}", budget.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
