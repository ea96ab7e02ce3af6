//! Task display formatting

use crate::config::Settings;
use crate::models::Task;
use crate::reports::EventTaskGroup;

/// Format tasks grouped under their events
pub fn format_task_groups(groups: &[EventTaskGroup], settings: &Settings) -> String {
    if groups.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}  {}\n", group.event_title, group.progress));

        for task in &group.tasks {
            let due = task
                .due_date
                .map(|d| d.format(&settings.date_format).to_string())
                .unwrap_or_else(|| "-".to_string());

            output.push_str(&format!(
                "  {:<10} {:<40} due {}\n",
                task.id.to_string(),
                task.to_string(),
                due
            ));
        }
    }

    output
}

/// Format a single task's details
pub fn format_task_details(task: &Task, event_title: &str, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Task: {}\n", task.title));
    output.push_str(&format!("  ID:           {}\n", task.id));
    output.push_str(&format!("  Event:        {} ({})\n", event_title, task.event_id));
    if let Some(due) = task.due_date {
        output.push_str(&format!(
            "  Due:          {}\n",
            due.format(&settings.date_format)
        ));
    }
    output.push_str(&format!(
        "  Completed:    {}\n",
        if task.completed { "Yes" } else { "No" }
    ));
    if !task.description.is_empty() {
        output.push_str(&format!("  Description:  {}\n", task.description));
    }

    output
}
