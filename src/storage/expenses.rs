//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json, keeping a
//! per-category index for the snapshot and cascade deletes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{CategoryId, Expense, ExpenseId, RecordKind};

use super::file_io::{load_records, save_records, RecordFile};
use super::lock_error;

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

impl RecordFile for ExpenseData {
    const KIND: RecordKind = RecordKind::Expense;
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    by_category: RwLock<HashMap<CategoryId, Vec<ExpenseId>>>,
}

/// Newest first; ties broken by creation time so the order is stable
fn newest_first(list: &mut [Expense]) {
    list.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_category: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and rebuild the category index
    pub fn load(&self) -> Result<(), SpendError> {
        let file_data: ExpenseData = load_records(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_category = self.by_category.write().map_err(lock_error)?;

        data.clear();
        by_category.clear();

        for expense in file_data.expenses {
            by_category
                .entry(expense.category_id)
                .or_default()
                .push(expense.id);
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk, newest first
    pub fn save(&self) -> Result<(), SpendError> {
        let file_data = ExpenseData {
            expenses: self.get_all()?,
        };
        save_records(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        let mut list: Vec<_> = data.values().cloned().collect();
        newest_first(&mut list);
        Ok(list)
    }

    /// Get the expenses filed under a category, newest first
    pub fn get_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        let by_category = self.by_category.read().map_err(lock_error)?;

        let mut list: Vec<_> = by_category
            .get(&category_id)
            .map(|ids| ids.iter().filter_map(|id| data.get(id).cloned()).collect())
            .unwrap_or_default();
        newest_first(&mut list);
        Ok(list)
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), SpendError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_category = self.by_category.write().map_err(lock_error)?;

        // Drop the old index entry if the expense moved category
        if let Some(old) = data.get(&expense.id) {
            if old.category_id != expense.category_id {
                if let Some(ids) = by_category.get_mut(&old.category_id) {
                    ids.retain(|id| *id != expense.id);
                }
            }
        }

        let ids = by_category.entry(expense.category_id).or_default();
        if !ids.contains(&expense.id) {
            ids.push(expense.id);
        }

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, SpendError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_category = self.by_category.write().map_err(lock_error)?;

        let removed = data.remove(&id);
        if let Some(expense) = &removed {
            if let Some(ids) = by_category.get_mut(&expense.category_id) {
                ids.retain(|eid| *eid != id);
            }
        }

        Ok(removed)
    }

    /// Delete every expense filed under a category, returning the removed ones
    pub fn delete_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>, SpendError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_category = self.by_category.write().map_err(lock_error)?;

        let removed = by_category
            .remove(&category_id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| data.remove(&id))
            .collect();

        Ok(removed)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, SpendError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
