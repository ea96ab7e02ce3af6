//! Expense CLI commands
//!
//! Implements CLI commands for recording expenses and reviewing spending.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_breakdown, format_expense_list};
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{EventId, ExpenseId, ExpensePatch, NewExpense};
use crate::services::{EventService, ExpenseService};
use crate::storage::Storage;

use super::parse_datetime;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses
    List {
        /// Only expenses for this event
        #[arg(short, long)]
        event: Option<EventId>,
    },
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "1200" or "1,200.50")
        amount: String,
        /// Event the expense is charged to
        #[arg(short, long)]
        event: Option<EventId>,
        /// Category (Venue, Catering, Marketing, Equipment, Travel, Other)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD or RFC 3339); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// Charge the expense to another event
        #[arg(short, long)]
        event: Option<EventId>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: ExpenseId,
    },
    /// List the expense categories
    Categories,
    /// Show an event's spending per category
    Breakdown {
        /// Event ID
        #[arg(short, long)]
        event: EventId,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> EventDeskResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::List { event } => {
            let expenses = match event {
                Some(event_id) => {
                    let event = EventService::new(storage).require(event_id)?;
                    println!("Expenses for: {}", event.title);
                    service.get_by_event_id(event_id)?
                }
                None => service.get_all()?,
            };
            println!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Add {
            description,
            amount,
            event,
            category,
            date,
        } => {
            let expense = service.create(NewExpense {
                event_id: event,
                description,
                amount: ExpenseService::parse_amount(&amount),
                category,
                date: date.as_deref().map(parse_datetime).transpose()?,
            })?;

            println!("Recorded expense: {}", expense.description);
            println!("  ID:       {}", expense.id);
            println!("  Event:    {}", expense.event_id);
            println!("  Category: {}", expense.category);
            println!(
                "  Amount:   {}",
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
            event,
        } => {
            let patch = ExpensePatch {
                description,
                // Unparseable text fails validation like a non-positive amount
                amount: amount
                    .as_deref()
                    .map(|text| ExpenseService::parse_amount(text).unwrap_or_default()),
                category,
                date: date.as_deref().map(parse_datetime).transpose()?,
                event_id: event,
            };

            if patch == ExpensePatch::default() {
                println!(
                    "No changes specified. Use --description, --amount, --category, --date, or --event."
                );
                return Ok(());
            }

            let expense = service
                .update(id, patch)?
                .ok_or_else(|| EventDeskError::expense_not_found(id.to_string()))?;
            println!("Updated expense: {} ({})", expense.description, expense.id);
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.require(id)?;

            if !service.delete(id) {
                return Err(EventDeskError::Storage(format!(
                    "Failed to delete expense {}",
                    id
                )));
            }
            println!("Deleted expense: {}", expense.description);
        }

        ExpenseCommands::Categories => {
            for category in ExpenseService::get_categories() {
                println!("{}", category);
            }
        }

        ExpenseCommands::Breakdown { event } => {
            let event = EventService::new(storage).require(event)?;
            let totals = service.get_expenses_by_category(event.id);

            println!("Spending by category: {}", event.title);
            print!("{}", format_category_breakdown(&totals, settings));
        }
    }

    Ok(())
}
