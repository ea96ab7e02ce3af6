//! Reports module for EventDesk
//!
//! Derived views recomputed from the services on every call: budget
//! position, task completion, the dashboard, and the per-event report.

pub mod budget;
pub mod dashboard;
pub mod event_report;
pub mod progress;

pub use budget::{progress_bar, BudgetSummary};
pub use dashboard::Dashboard;
pub use event_report::{
    BudgetFigures, CategoryTotal, EventReport, ProgressFigures, REPORT_SCHEMA_VERSION,
};
pub use progress::{group_tasks_by_event, EventTaskGroup, TaskProgress, UNKNOWN_EVENT};
