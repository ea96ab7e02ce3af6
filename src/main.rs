use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use eventdesk::audit::AuditLogger;
use eventdesk::cli::{
    handle_event_command, handle_expense_command, handle_export_command, handle_task_command,
    EventCommands, ExpenseCommands, ExportCommands, TaskCommands,
};
use eventdesk::config::{paths::EventDeskPaths, settings::Settings};
use eventdesk::logging::init_logging;
use eventdesk::reports::Dashboard;
use eventdesk::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "eventdesk",
    version,
    about = "Plan events, track their tasks and keep spending within budget",
    long_about = "EventDesk keeps the events you are planning, the tasks that \
                  need doing for each one, and the expenses charged against \
                  their budgets, all from the command line."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init {
        /// Populate with a small demo collection
        #[arg(long)]
        demo: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Show event counts and what is coming up
    #[command(alias = "dash")]
    Dashboard,

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Event management commands
    #[command(subcommand)]
    Event(EventCommands),

    /// Task management commands
    #[command(subcommand)]
    Task(TaskCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Export commands
    #[command(subcommand)]
    Export(ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = EventDeskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let open_storage = || -> Result<Storage> {
        let storage = Storage::open(&paths)?;
        Ok(if settings.audit_enabled {
            storage.with_audit(AuditLogger::new(paths.audit_log()))
        } else {
            storage
        })
    };

    match cli.command {
        Some(Commands::Init { demo }) => {
            println!("Initializing EventDesk at: {}", paths.base_dir().display());
            let seeded = initialize_storage(&paths, demo)?;
            settings.save(&paths)?;
            println!("Initialization complete!");

            if seeded {
                println!();
                println!("A demo collection of events, tasks and expenses has been created.");
                println!("Run 'eventdesk dashboard' to see what is coming up.");
            } else if demo {
                println!();
                println!("Existing data found; the demo collection was not written.");
            }
        }
        Some(Commands::Config) => {
            println!("EventDesk Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no (run 'eventdesk init')" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Upcoming limit:  {}", settings.upcoming_limit);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Dashboard) => {
            let storage = open_storage()?;
            let dashboard = Dashboard::generate(&storage, settings.upcoming_limit);
            print!("{}", dashboard.format_terminal(&settings));
        }
        Some(Commands::Audit { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;

            if entries.is_empty() {
                println!("No audit entries found.");
            }
            for entry in entries {
                println!("{}", entry);
            }
        }
        Some(Commands::Event(cmd)) => {
            let storage = open_storage()?;
            handle_event_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Task(cmd)) => {
            let storage = open_storage()?;
            handle_task_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let storage = open_storage()?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let storage = open_storage()?;
            handle_export_command(&storage, cmd)?;
        }
        None => {
            println!("EventDesk - event planning from the terminal");
            println!();
            println!("Run 'eventdesk --help' for usage information.");
            println!("Run 'eventdesk init --demo' to start with sample data.");
        }
    }

    Ok(())
}
