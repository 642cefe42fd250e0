//! Export module for SpendSmart
//!
//! Provides machine-readable output:
//! - JSON: expense export and the monthly dashboard
//! - YAML: the monthly dashboard, human-readable
//!
//! CSV output of the dashboard lives on `MonthlyReport::export_csv`.

pub mod json;
pub mod yaml;

pub use json::{expense_records, export_expenses_json, export_report_json, ExpenseRecord};
pub use yaml::export_report_yaml;
