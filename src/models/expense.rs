//! Expense model
//!
//! An expense is a positive amount spent on a given date, filed under one
//! category.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};

/// Maximum length of an expense description
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Category this expense is filed under
    pub category_id: CategoryId,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Amount spent
    pub amount: f64,

    /// When the expense happened
    pub date: NaiveDateTime,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(category_id: CategoryId, amount: f64, date: NaiveDateTime) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            category_id,
            description: String::new(),
            amount,
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new expense with a description
    pub fn with_description(
        category_id: CategoryId,
        amount: f64,
        date: NaiveDateTime,
        description: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(category_id, amount, date);
        expense.description = description.into();
        expense
    }

    /// Calendar day of the expense; time of day is ignored
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        let len = self.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.day(), self.amount)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    DescriptionTooLong(usize),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::DescriptionTooLong(len) => write!(
                f,
                "Description too long ({} chars, max {})",
                len, MAX_DESCRIPTION_LEN
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_day_ignores_time() {
        let expense = Expense::new(CategoryId::new(), 12.5, at(2025, 3, 31, 23));
        assert_eq!(expense.day(), NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn test_expense_validation() {
        let mut expense = Expense::new(CategoryId::new(), 12.5, at(2025, 1, 1, 9));
        assert!(expense.validate().is_ok());

        expense.amount = 0.0;
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );

        expense.amount = -4.0;
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );

        expense.amount = 4.0;
        expense.description = "x".repeat(201);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::DescriptionTooLong(201))
        ));
    }

    #[test]
    fn test_display() {
        let expense =
            Expense::with_description(CategoryId::new(), 3200.0, at(2025, 1, 5, 10), "Groceries");
        assert_eq!(expense.to_string(), "2025-01-05 3200.00 (Groceries)");
    }
}
