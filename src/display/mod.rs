//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models and reports for terminal
//! display.

pub mod category;
pub mod expense;
pub mod report;

pub use category::{format_category_details, format_category_list};
pub use expense::format_expense_list;
pub use report::{format_amount, format_date};
