//! JSON Export functionality
//!
//! Writes an [`EventReport`] as JSON and reads one back.

use std::io::Write;

use crate::error::{EventDeskError, EventDeskResult};
use crate::reports::EventReport;

/// Write an event report as JSON
pub fn export_report_json<W: Write>(
    report: &EventReport,
    writer: &mut W,
    pretty: bool,
) -> EventDeskResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, report)
    } else {
        serde_json::to_writer(&mut *writer, report)
    };
    written.map_err(|e| EventDeskError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| EventDeskError::Export(e.to_string()))?;
    Ok(())
}

/// Parse and validate a JSON event report
pub fn import_report_json(json: &str) -> EventDeskResult<EventReport> {
    let report: EventReport =
        serde_json::from_str(json).map_err(|e| EventDeskError::Export(e.to_string()))?;

    report.validate().map_err(EventDeskError::Export)?;

    Ok(report)
}
