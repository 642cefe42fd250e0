//! CLI commands for data export

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use super::open_output;
use crate::error::{SpendError, SpendResult};
use crate::export::export_expenses_json;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export every expense as a JSON array, newest first
    Expenses {
        /// Output file path; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SpendResult<()> {
    match cmd {
        ExportCommands::Expenses { output } => {
            let mut writer = open_output(output.as_deref())?;
            export_expenses_json(storage, &mut writer)?;
            writer.flush().map_err(|e| SpendError::Export(e.to_string()))?;
            drop(writer);

            if let Some(path) = output {
                eprintln!(
                    "Exported {} expenses to: {}",
                    storage.expenses.count()?,
                    path.display()
                );
            }
        }
    }

    Ok(())
}
