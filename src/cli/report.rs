//! CLI commands for reports
//!
//! The monthly dashboard in text, JSON, YAML or CSV, and the all-time
//! spending overview.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;

use super::open_output;
use crate::config::settings::Settings;
use crate::error::{SpendError, SpendResult};
use crate::export::{export_report_json, export_report_yaml};
use crate::reports::{MonthlyReport, SpendingOverview};
use crate::storage::Storage;

/// Dashboard output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// One CSV row per category plus a total row
    Csv,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    date: NaiveDate,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> SpendResult<()> {
    let report = MonthlyReport::generate(storage, date)?;

    let mut writer = open_output(output.as_deref())?;
    match format {
        ReportFormat::Text => {
            write!(writer, "{}", report.format_terminal(&settings.currency_symbol))
                .map_err(|e| SpendError::Export(e.to_string()))?;
        }
        ReportFormat::Json => export_report_json(&report, &mut writer)?,
        ReportFormat::Yaml => export_report_yaml(&report, &mut writer)?,
        ReportFormat::Csv => report.export_csv(&mut writer)?,
    }
    writer.flush().map_err(|e| SpendError::Export(e.to_string()))?;
    drop(writer);

    if let Some(path) = output {
        eprintln!("Dashboard written to: {}", path.display());
    }

    Ok(())
}

/// Handle the overview command
pub fn handle_overview_command(storage: &Storage, settings: &Settings) -> SpendResult<()> {
    let overview = SpendingOverview::generate(storage, settings.recent_expense_limit)?;
    print!(
        "{}",
        overview.format_terminal(&settings.currency_symbol, &settings.date_format)
    );
    Ok(())
}
