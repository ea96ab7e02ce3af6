//! Export module for EventDesk
//!
//! Writes a per-event report in multiple formats:
//! - CSV: the event's expenses (spreadsheet-compatible)
//! - JSON: the full report, machine-readable
//! - YAML: the full report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_report_json, import_report_json};
pub use yaml::{export_report_yaml, import_report_yaml};
