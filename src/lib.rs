//! SpendSmart - personal expense tracking with monthly budget analytics
//!
//! Expenses are filed under categories that each carry a monthly budget.
//! The dashboard compares month-to-date spending with a linear pace through
//! the month and flags categories running more than 10% ahead of it.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Categories, expenses and the report engine's input snapshot
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly dashboard and spending overview
//! - `export`: JSON and YAML output
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spendsmart::models::CategorySnapshot;
//! use spendsmart::compute_monthly_report;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! let categories = vec![CategorySnapshot::new("Food", 3100.0).with_expense(2000.0, today)];
//!
//! let report = compute_monthly_report(today, &categories);
//! assert_eq!(report.daily_budget, 100.0);
//! assert_eq!(report.risk_categories.len(), 1);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendError, SpendResult};
pub use reports::{compute_monthly_report, MonthlyReport};
