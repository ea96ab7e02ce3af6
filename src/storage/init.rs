//! Storage initialization
//!
//! Handles first-run setup and the optional demo collection

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::config::paths::EventDeskPaths;
use crate::error::EventDeskError;
use crate::models::{
    Event, EventId, EventStatus, Expense, ExpenseCategory, ExpenseId, Money, Task, TaskId,
};

use super::file_io::write_json_atomic;

/// A fixed collection of records to start a store from
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub events: Vec<Event>,
    pub tasks: Vec<Task>,
    pub expenses: Vec<Expense>,
}

impl SeedData {
    /// Demo events, tasks, and expenses with dates relative to `now`
    pub fn demo(now: DateTime<Utc>) -> Self {
        let event = |id: i64, title: &str, days: i64, description: &str, dollars: i64, status| {
            let created = now - Duration::days(30);
            Event {
                id: EventId::new(id),
                title: title.to_string(),
                date: now + Duration::days(days),
                description: description.to_string(),
                budget: Money::from_dollars(dollars),
                status,
                created_at: created,
                updated_at: created,
            }
        };

        let events = vec![
            event(
                1,
                "Annual Tech Conference",
                -14,
                "Two-day conference with keynote speakers and workshops",
                25_000,
                EventStatus::Completed,
            ),
            event(
                2,
                "Product Launch Event",
                10,
                "Launch of the new product line for press and partners",
                15_000,
                EventStatus::InProgress,
            ),
            event(
                3,
                "Holiday Company Party",
                45,
                "End of year celebration for all staff",
                8_000,
                EventStatus::Planning,
            ),
            event(
                4,
                "Customer Appreciation Dinner",
                60,
                "Dinner for our top customers",
                5_000,
                EventStatus::Planning,
            ),
            event(
                5,
                "Team Offsite",
                20,
                "Quarterly planning retreat",
                3_000,
                EventStatus::Cancelled,
            ),
        ];

        let task = |id: i64, title: &str, description: &str, days: i64, event_id: i64, completed| {
            Task {
                id: TaskId::new(id),
                title: title.to_string(),
                description: description.to_string(),
                due_date: Some(now + Duration::days(days)),
                event_id: EventId::new(event_id),
                completed,
            }
        };

        let tasks = vec![
            task(1, "Book keynote speakers", "Confirm three speakers", -40, 1, true),
            task(2, "Send press invitations", "Media list from marketing", 3, 2, true),
            task(3, "Prepare demo stations", "Four stations with devices", 8, 2, false),
            task(4, "Rehearse launch presentation", "", 9, 2, false),
            task(5, "Reserve venue", "Ballroom for 120 guests", 15, 3, false),
            task(6, "Choose caterer", "Get three quotes", 25, 3, false),
            task(7, "Finalize guest list", "", 40, 4, false),
        ];

        let expense = |id: i64,
                       description: &str,
                       cents: i64,
                       category,
                       days: i64,
                       event_id: i64| {
            Expense {
                id: ExpenseId::new(id),
                description: description.to_string(),
                amount: Money::from_cents(cents),
                category,
                date: now + Duration::days(days),
                event_id: EventId::new(event_id),
                created_at: now + Duration::days(days),
            }
        };

        let expenses = vec![
            expense(1, "Convention center rental", 1_200_000, ExpenseCategory::Venue, -45, 1),
            expense(2, "Lunch and coffee service", 650_000, ExpenseCategory::Catering, -20, 1),
            expense(3, "Speaker travel", 280_000, ExpenseCategory::Travel, -16, 1),
            expense(4, "Launch video production", 400_000, ExpenseCategory::Marketing, -10, 2),
            expense(5, "Demo hardware", 215_050, ExpenseCategory::Equipment, -5, 2),
            expense(6, "Venue deposit", 150_000, ExpenseCategory::Venue, -2, 3),
        ];

        Self {
            events,
            tasks,
            expenses,
        }
    }
}

/// Initialize storage for a fresh installation
///
/// Creates the directory layout. With `demo`, the demo collection is written
/// only when none of the record files exist yet, so seeded tasks and expenses
/// never point at events from some other collection. Returns whether the demo
/// collection was written.
pub fn initialize_storage(paths: &EventDeskPaths, demo: bool) -> Result<bool, EventDeskError> {
    paths.ensure_directories()?;

    if !demo {
        return Ok(false);
    }

    let files = [paths.events_file(), paths.tasks_file(), paths.expenses_file()];
    if files.iter().any(|f| f.exists()) {
        warn!("record files already exist; demo collection not written");
        return Ok(false);
    }

    let seed = SeedData::demo(Utc::now());
    write_json_atomic(paths.events_file(), &seed.events)?;
    write_json_atomic(paths.tasks_file(), &seed.tasks)?;
    write_json_atomic(paths.expenses_file(), &seed.expenses)?;

    Ok(true)
}
