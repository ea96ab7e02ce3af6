//! CLI commands for data export
//!
//! Provides commands for exporting event reports in various formats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{EventDeskError, EventDeskResult};
use crate::export::{
    export_expenses_csv, export_report_json, export_report_yaml, import_report_json,
    import_report_yaml,
};
use crate::models::EventId;
use crate::reports::EventReport;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full report)
    Json,
    /// YAML format (full report, human-readable)
    Yaml,
    /// CSV format (expenses only)
    Csv,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export an event report
    Event {
        /// Event ID
        id: EventId,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Check that a previously exported JSON or YAML report is readable
    Verify {
        /// Report file path
        file: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> EventDeskResult<()> {
    match cmd {
        ExportCommands::Event {
            id,
            format,
            output,
            compact,
        } => {
            let report = EventReport::generate(storage, id)?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        EventDeskError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    write_report(&report, format, !compact, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| EventDeskError::Export(e.to_string()))?;

                    println!(
                        "Exported '{}' as {:?} to: {}",
                        report.event.title,
                        format,
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    write_report(&report, format, !compact, &mut writer)?;
                }
            }

            Ok(())
        }

        ExportCommands::Verify { file } => handle_verify(&file),
    }
}

fn write_report<W: Write>(
    report: &EventReport,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> EventDeskResult<()> {
    match format {
        ExportFormat::Json => export_report_json(report, writer, pretty),
        ExportFormat::Yaml => export_report_yaml(report, writer),
        ExportFormat::Csv => export_expenses_csv(report, writer),
    }
}

fn handle_verify(file: &Path) -> EventDeskResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        EventDeskError::Export(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let is_yaml = matches!(
        file.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let report = if is_yaml {
        import_report_yaml(&contents)?
    } else {
        import_report_json(&contents)?
    };

    println!("Report is valid");
    println!("  Schema:   {}", report.schema_version);
    println!("  Event:    {} ({})", report.event.title, report.event.id);
    println!("  Tasks:    {}", report.tasks.len());
    println!("  Expenses: {}", report.expenses.len());

    Ok(())
}
