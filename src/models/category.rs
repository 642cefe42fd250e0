//! Category model
//!
//! A category is a user-defined spending bucket with an optional monthly
//! budget. A budget of zero means "track but do not limit".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Maximum length of a category name
pub const MAX_CATEGORY_NAME_LEN: usize = 80;

/// A spending category with a monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique)
    pub name: String,

    /// Monthly budget; `None` is treated as zero
    #[serde(default)]
    pub budget: Option<f64>,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, budget: f64) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            budget: Some(budget),
            created_at: now,
            updated_at: now,
        }
    }

    /// The monthly budget, with a missing value read as zero
    pub fn budget_or_zero(&self) -> f64 {
        self.budget.unwrap_or(0.0)
    }

    /// Set a new monthly budget
    pub fn set_budget(&mut self, budget: f64) {
        self.budget = Some(budget);
        self.updated_at = Utc::now();
    }

    /// Rename the category
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_CATEGORY_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        if let Some(budget) = self.budget {
            if !budget.is_finite() {
                return Err(CategoryValidationError::InvalidBudget);
            }
            if budget < 0.0 {
                return Err(CategoryValidationError::NegativeBudget);
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeBudget,
    InvalidBudget,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name is required"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} chars, max {})",
                len, MAX_CATEGORY_NAME_LEN
            ),
            Self::NegativeBudget => write!(f, "Budget cannot be negative"),
            Self::InvalidBudget => write!(f, "Budget must be a finite number"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
