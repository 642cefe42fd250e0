//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use history::handle_history_command;
pub use report::{handle_dashboard_command, handle_overview_command, ReportFormat};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{SpendError, SpendResult};

/// Parse a user-supplied amount such as `3200` or `12.50`
pub fn parse_amount(input: &str, what: &str) -> SpendResult<f64> {
    let value: f64 = input
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| SpendError::Validation(format!("Invalid {}: '{}'", what, input)))?;

    if !value.is_finite() {
        return Err(SpendError::Validation(format!("Invalid {}: '{}'", what, input)));
    }

    Ok(value)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> SpendResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        SpendError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a `YYYY-MM-DD` date as midnight of that day
pub fn parse_date_time(input: &str) -> SpendResult<NaiveDateTime> {
    let date = parse_date(input)?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| SpendError::Validation(format!("Invalid date: '{}'", input)))
}

/// Open the output destination: the given file, or stdout
pub fn open_output(path: Option<&Path>) -> SpendResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
