//! Read-only inputs for the monthly analytics
//!
//! A snapshot is what the storage layer hands to the dashboard: every
//! category in name order, each with the expense events filed under it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// A dated amount, as seen by the analytics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEvent {
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseEvent {
    pub fn new(amount: f64, date: NaiveDate) -> Self {
        Self { amount, date }
    }
}

/// A category with its budget and its expense events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
    /// `None` counts as zero
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEvent>,
}

impl CategorySnapshot {
    /// A snapshot with no expenses yet
    pub fn new(name: impl Into<String>, budget: f64) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            budget: Some(budget),
            expenses: Vec::new(),
        }
    }

    /// Builder-style helper for attaching an expense event
    pub fn with_expense(mut self, amount: f64, date: NaiveDate) -> Self {
        self.expenses.push(ExpenseEvent::new(amount, date));
        self
    }

    pub fn budget_or_zero(&self) -> f64 {
        self.budget.unwrap_or(0.0)
    }
}
