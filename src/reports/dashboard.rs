//! Dashboard
//!
//! Headline event counts plus the next few upcoming events. Every part of
//! the dashboard degrades to an empty state instead of failing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Settings;
use crate::models::Event;
use crate::services::{EventService, EventStats, TaskService};
use crate::storage::Storage;

/// Snapshot shown by the `dashboard` command
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub stats: EventStats,
    /// Soonest upcoming events, at most the requested limit
    pub upcoming: Vec<Event>,
    /// Tasks not yet completed, across all events
    pub open_tasks: usize,
}

impl Dashboard {
    /// Build the dashboard as of now
    pub fn generate(storage: &Storage, upcoming_limit: usize) -> Self {
        Self::generate_as_of(storage, upcoming_limit, Utc::now())
    }

    /// Build the dashboard relative to `now`
    pub fn generate_as_of(storage: &Storage, upcoming_limit: usize, now: DateTime<Utc>) -> Self {
        let events = EventService::new(storage);

        let mut upcoming = events.get_upcoming_as_of(now);
        upcoming.truncate(upcoming_limit);

        Self {
            generated_at: now,
            stats: events.get_stats_as_of(now),
            upcoming,
            open_tasks: TaskService::new(storage).get_active_tasks().len(),
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Events:      {:>6}\n", self.stats.total_events));
        output.push_str(&format!("Upcoming Events:   {:>6}\n", self.stats.upcoming_events));
        output.push_str(&format!("Active Events:     {:>6}\n", self.stats.active_events));
        output.push_str(&format!("Completed Events:  {:>6}\n", self.stats.completed_events));
        output.push_str(&format!("Open Tasks:        {:>6}\n", self.open_tasks));
        output.push('\n');

        output.push_str("Upcoming Events\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.upcoming.is_empty() {
            output.push_str("No upcoming events.\n");
            return output;
        }

        for event in &self.upcoming {
            output.push_str(&format!(
                "{:<8} {:<30} {}  [{}]\n",
                event.id.to_string(),
                event.title,
                event.date.format(&settings.datetime_format),
                event.status
            ));
        }

        output
    }
}
