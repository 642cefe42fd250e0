//! Expense service
//!
//! Provides business logic for recording, listing, editing and deleting
//! expenses.

use chrono::{Local, NaiveDateTime};

use crate::error::{SpendError, SpendResult};
use crate::models::{CategoryId, Expense, ExpenseId, RecordKind};
use crate::storage::Storage;

/// Fields that may change when editing an expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub date: Option<NaiveDateTime>,
}

impl ExpenseChanges {
    /// Whether any field is set
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense; the date defaults to now
    pub fn create(
        &self,
        amount: f64,
        category_id: CategoryId,
        description: &str,
        date: Option<NaiveDateTime>,
    ) -> SpendResult<Expense> {
        self.ensure_category(category_id)?;

        let date = date.unwrap_or_else(|| Local::now().naive_local());
        let expense = Expense::with_description(category_id, amount, date, description.trim());
        expense
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_created(&expense)?;

        tracing::info!(id = %expense.id, amount = expense.amount, "expense recorded");
        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> SpendResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full or short ID
    pub fn find(&self, identifier: &str) -> SpendResult<Option<Expense>> {
        if let Ok(id) = identifier.trim().parse::<ExpenseId>() {
            return self.storage.expenses.get(id);
        }

        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .find(|e| e.id.matches(identifier)))
    }

    /// Find an expense or fail with a not-found error
    pub fn require(&self, identifier: &str) -> SpendResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| SpendError::not_found(RecordKind::Expense, identifier))
    }

    /// List all expenses, newest first
    pub fn list(&self) -> SpendResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// The `limit` most recent expenses
    pub fn recent(&self, limit: usize) -> SpendResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.get_all()?;
        expenses.truncate(limit);
        Ok(expenses)
    }

    /// Apply changes to an expense
    pub fn update(&self, id: ExpenseId, changes: ExpenseChanges) -> SpendResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| SpendError::not_found(RecordKind::Expense, id.to_string()))?;

        if changes.is_empty() {
            return Ok(expense);
        }

        let before = expense.clone();

        if let Some(category_id) = changes.category_id {
            self.ensure_category(category_id)?;
            expense.category_id = category_id;
        }
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(description) = changes.description {
            expense.description = description.trim().to_string();
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }

        expense
            .validate()
            .map_err(|e| SpendError::Validation(e.to_string()))?;
        expense.updated_at = chrono::Utc::now();

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_updated(&before, &expense)?;

        tracing::info!(id = %expense.id, "expense updated");
        Ok(expense)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, id: ExpenseId) -> SpendResult<Expense> {
        let expense = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| SpendError::not_found(RecordKind::Expense, id.to_string()))?;
        self.storage.expenses.save()?;

        self.storage.log_deleted(&expense)?;

        tracing::info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    fn ensure_category(&self, id: CategoryId) -> SpendResult<()> {
        match self.storage.categories.get(id)? {
            Some(_) => Ok(()),
            None => Err(SpendError::not_found(RecordKind::Category, id.to_string())),
        }
    }
}
