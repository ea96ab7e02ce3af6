//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display as
//! aligned tables and detail views.

pub mod event;
pub mod expense;
pub mod task;

pub use event::{format_event_details, format_event_list};
pub use expense::{format_category_breakdown, format_expense_list};
pub use task::{format_task_details, format_task_groups};

use crate::config::Settings;
use crate::models::Money;

/// Render an amount with the configured currency symbol
pub(crate) fn money(settings: &Settings, amount: Money) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Width of the widest value, but at least `min`
pub(crate) fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(min).max(min)
}
