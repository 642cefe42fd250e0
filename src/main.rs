use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use spendsmart::cli::{
    handle_category_command, handle_dashboard_command, handle_expense_command,
    handle_export_command, handle_history_command, handle_overview_command, parse_date,
    CategoryCommands, ExpenseCommands, ExportCommands, ReportFormat,
};
use spendsmart::config::{paths::SpendPaths, settings::Settings};
use spendsmart::logging::init_tracing;
use spendsmart::storage::{seed_sample_data, Storage};

#[derive(Parser)]
#[command(
    name = "spendsmart",
    version,
    about = "Track expenses against monthly category budgets",
    long_about = "SpendSmart records your expenses by category and shows how this \
                  month's spending is pacing against each category's budget: \
                  projected month-end spend, at-risk categories and top spenders."
)]
struct Cli {
    /// Data directory (overrides the default config location)
    #[arg(long, global = true, env = "SPENDSMART_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this month's budget dashboard
    #[command(alias = "dash")]
    Dashboard {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show all-time spending per category and recent expenses
    Overview,

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init {
        /// Also create sample categories and expenses
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => SpendPaths::with_base_dir(dir),
        None => SpendPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Dashboard {
            date,
            format,
            output,
        }) => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            handle_dashboard_command(&storage, &settings, date, format, output)?;
        }
        Some(Commands::Overview) => handle_overview_command(&storage, &settings)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Init { sample }) => {
            println!("Initializing SpendSmart at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            if sample {
                if seed_sample_data(&storage)? {
                    println!("Sample categories and expenses created.");
                } else {
                    println!("Categories already exist; sample data skipped.");
                }
            }

            println!("Initialization complete!");
            println!();
            println!("Run 'spendsmart category add <name> --budget <amount>' to add a category.");
            println!("Run 'spendsmart dashboard' to see this month's pacing.");
        }
        Some(Commands::Config) => {
            println!("SpendSmart Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Audit log:        {}{}",
                storage.audit().path().display(),
                if storage.audit().exists() { "" } else { " (empty)" }
            );
            println!(
                "Initialized:      {}",
                if storage.is_initialized() { "yes" } else { "no (run 'spendsmart init')" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Recent expense limit:  {}", settings.recent_expense_limit);
        }
        None => {
            println!("SpendSmart - monthly budget tracking");
            println!();
            println!("Run 'spendsmart --help' for usage information.");
            println!("Run 'spendsmart dashboard' to see this month's pacing.");
        }
    }

    Ok(())
}
