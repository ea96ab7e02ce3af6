//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod event;
pub mod expense;
pub mod export;
pub mod task;

pub use event::{handle_event_command, EventCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use task::{handle_task_command, TaskCommands};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{EventDeskError, EventDeskResult};
use crate::models::Money;

/// Parse a date given as `YYYY-MM-DD` (midnight UTC) or RFC 3339
pub(crate) fn parse_datetime(s: &str) -> EventDeskResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            EventDeskError::Validation(format!(
                "Invalid date '{}': expected YYYY-MM-DD or RFC 3339",
                s
            ))
        })
}

/// Parse a money amount such as a budget
pub(crate) fn parse_money(s: &str) -> EventDeskResult<Money> {
    Money::parse(s).map_err(|e| EventDeskError::Validation(format!("Invalid amount: {}", e)))
}
