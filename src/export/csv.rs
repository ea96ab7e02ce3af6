//! CSV Export functionality
//!
//! Writes an event's expenses, one row per expense, followed by a total row.

use std::io::Write;

use ::csv::Writer;

use crate::error::{EventDeskError, EventDeskResult};
use crate::reports::EventReport;

const HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Event",
    "Description",
    "Category",
    "Amount",
    "Recorded At",
];

fn export_err(e: ::csv::Error) -> EventDeskError {
    EventDeskError::Export(e.to_string())
}

/// Write the report's expenses as CSV
///
/// Amounts are decimal currency units with two places; dates are ISO 8601.
pub fn export_expenses_csv<W: Write>(report: &EventReport, writer: W) -> EventDeskResult<()> {
    let mut csv = Writer::from_writer(writer);

    csv.write_record(HEADER).map_err(export_err)?;

    for expense in &report.expenses {
        csv.write_record([
            expense.id.value().to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            report.event.title.clone(),
            expense.description.clone(),
            expense.category.to_string(),
            format!("{:.2}", expense.amount.as_decimal()),
            expense.created_at.to_rfc3339(),
        ])
        .map_err(export_err)?;
    }

    let total = format!("{:.2}", report.budget.total_expenses.as_decimal());
    csv.write_record([
        "",
        "",
        report.event.title.as_str(),
        "TOTAL",
        "",
        total.as_str(),
        "",
    ])
    .map_err(export_err)?;

    csv.flush()
        .map_err(|e| EventDeskError::Export(e.to_string()))?;

    Ok(())
}
