//! Event display formatting
//!
//! Formats events for terminal output in table and detail views.

use crate::config::Settings;
use crate::models::{Event, Task};
use crate::reports::{BudgetSummary, TaskProgress};

use super::{column_width, money};

/// Format a list of events as a table
pub fn format_event_list(events: &[Event], settings: &Settings) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    let ids: Vec<String> = events.iter().map(|e| e.id.to_string()).collect();
    let dates: Vec<String> = events
        .iter()
        .map(|e| e.date.format(&settings.date_format).to_string())
        .collect();

    let id_width = column_width(ids.iter().map(String::as_str), 2);
    let title_width = column_width(events.iter().map(|e| e.title.as_str()), 5);
    let date_width = column_width(dates.iter().map(String::as_str), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<title_width$}  {:<date_width$}  {:<11}  {:>14}\n",
        "ID", "Title", "Date", "Status", "Budget",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<title_width$}  {:-<date_width$}  {:-<11}  {:->14}\n",
        "", "", "", "", "",
    ));

    for ((event, id), date) in events.iter().zip(&ids).zip(&dates) {
        output.push_str(&format!(
            "{:<id_width$}  {:<title_width$}  {:<date_width$}  {:<11}  {:>14}\n",
            id,
            event.title,
            date,
            event.status.as_str(),
            money(settings, event.budget),
        ));
    }

    output
}

/// Format a single event with its budget position and task progress
pub fn format_event_details(
    event: &Event,
    budget: &BudgetSummary,
    tasks: &[Task],
    settings: &Settings,
) -> String {
    let progress = TaskProgress::from_tasks(tasks);
    let mut output = String::new();

    output.push_str(&format!("Event: {}\n", event.title));
    output.push_str(&format!("  ID:           {}\n", event.id));
    output.push_str(&format!(
        "  Date:         {}\n",
        event.date.format(&settings.datetime_format)
    ));
    output.push_str(&format!("  Status:       {}\n", event.status));
    if !event.description.is_empty() {
        output.push_str(&format!("  Description:  {}\n", event.description));
    }
    output.push_str(&format!(
        "  Created:      {}\n",
        event.created_at.format(&settings.datetime_format)
    ));
    output.push_str(&format!(
        "  Updated:      {}\n",
        event.updated_at.format(&settings.datetime_format)
    ));

    output.push_str("\nBudget\n");
    output.push_str(&budget.format_terminal(&settings.currency_symbol));

    output.push_str(&format!("\nTasks: {}\n", progress));
    for task in tasks {
        output.push_str(&format!("  {}  {}\n", task.id, task));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventId, EventStatus, Money, NewEvent};
    use chrono::{TimeZone, Utc};

    fn event(id: i64, title: &str) -> Event {
        let date = Utc.with_ymd_and_hms(2026, 12, 18, 19, 30, 0).unwrap();
        let mut e = Event::from_new(
            NewEvent {
                title: title.into(),
                date,
                description: "Rooftop venue".into(),
                budget: Money::from_cents(1_250_050),
                status: Some(EventStatus::InProgress),
            },
            date,
        );
        e.id = EventId::new(id);
        e
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_event_list(&[], &Settings::default()), "No events found.");
    }

    #[test]
    fn test_list_columns() {
        let output = format_event_list(&[event(12, "Holiday Party")], &Settings::default());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("evt-12"));
        assert!(lines[2].contains("Dec 18, 2026"));
        assert!(lines[2].contains("In Progress"));
        assert!(lines[2].ends_with("$12,500.50"));
    }

    #[test]
    fn test_details_include_budget_and_time() {
        let e = event(1, "Holiday Party");
        let budget = BudgetSummary::from_totals(e.id, e.budget, Money::from_dollars(500));
        let output = format_event_details(&e, &budget, &[], &Settings::default());

        assert!(output.contains("Dec 18, 2026 at 7:30 PM"));
        assert!(output.contains("Rooftop venue"));
        assert!(output.contains("Remaining:"));
        assert!(output.contains("Tasks: 0/0 (0%)"));
    }
}
