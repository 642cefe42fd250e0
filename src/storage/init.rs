//! Sample data seeding
//!
//! Fills an empty store with a handful of categories and expenses so the
//! dashboard has something to show on first run.

use chrono::{Local, NaiveDateTime};

use crate::error::SpendResult;
use crate::models::{Category, Expense};

use super::Storage;

const SAMPLE_CATEGORIES: [(&str, f64); 4] = [
    ("Food", 5000.0),
    ("Rent", 10000.0),
    ("Shopping", 3000.0),
    ("Transport", 1000.0),
];

const SAMPLE_EXPENSES: [(&str, f64, &str); 3] = [
    ("Groceries", 3200.0, "Food"),
    ("Monthly rent", 10000.0, "Rent"),
    ("Shoes", 1500.0, "Shopping"),
];

/// Seed sample categories and expenses dated now.
///
/// Does nothing when any category already exists. Returns whether data was
/// written.
pub fn seed_sample_data(storage: &Storage) -> SpendResult<bool> {
    seed_sample_data_at(storage, Local::now().naive_local())
}

/// Seed sample data with every expense dated `when`
pub fn seed_sample_data_at(storage: &Storage, when: NaiveDateTime) -> SpendResult<bool> {
    if storage.categories.count()? > 0 {
        tracing::debug!("categories already present, skipping sample data");
        return Ok(false);
    }

    for (name, budget) in SAMPLE_CATEGORIES {
        let category = Category::new(name, budget);
        storage.categories.upsert(category.clone())?;
        storage.log_created(&category)?;
    }

    for (description, amount, category_name) in SAMPLE_EXPENSES {
        let Some(category) = storage.categories.get_by_name(category_name)? else {
            continue;
        };
        let expense = Expense::with_description(category.id, amount, when, description);
        storage.expenses.upsert(expense.clone())?;
        storage.log_created(&expense)?;
    }

    storage.save_all()?;
    tracing::info!(
        categories = SAMPLE_CATEGORIES.len(),
        expenses = SAMPLE_EXPENSES.len(),
        "sample data seeded"
    );

    Ok(true)
}
