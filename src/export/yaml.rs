//! YAML Export functionality
//!
//! Writes an [`EventReport`] as human-readable YAML with a comment header.

use std::io::Write;

use crate::error::{EventDeskError, EventDeskResult};
use crate::reports::EventReport;

/// Write an event report as YAML
pub fn export_report_yaml<W: Write>(report: &EventReport, writer: &mut W) -> EventDeskResult<()> {
    let header = [
        format!("# EventDesk Report: {}", report.event.title),
        format!("# Generated: {}", report.generated_at),
        format!("# App Version: {}", report.app_version),
        "#".to_string(),
        "# Amounts are stored in cents.".to_string(),
    ];

    for line in &header {
        writeln!(writer, "{}", line).map_err(|e| EventDeskError::Export(e.to_string()))?;
    }
    writeln!(writer).map_err(|e| EventDeskError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| EventDeskError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML event report
pub fn import_report_yaml(yaml: &str) -> EventDeskResult<EventReport> {
    let report: EventReport =
        serde_yaml::from_str(yaml).map_err(|e| EventDeskError::Export(e.to_string()))?;

    report.validate().map_err(EventDeskError::Export)?;

    Ok(report)
}
