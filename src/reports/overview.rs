//! Spending overview
//!
//! All-time spend per category alongside its budget, grand totals, and the
//! most recent expenses.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

use crate::display::report::{
    format_amount, format_date, format_header, format_percentage, separator, truncate,
};
use crate::error::SpendResult;
use crate::models::{CategoryId, ExpenseId};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// All-time figures for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategorySpending {
    pub name: String,
    pub budget: f64,
    pub spent: f64,
    pub expense_count: usize,
    /// Share of all spending, in percent
    pub percentage: f64,
}

/// One line of the recent expenses list
#[derive(Debug, Clone, Serialize)]
pub struct RecentExpense {
    pub id: ExpenseId,
    pub date: NaiveDateTime,
    pub description: String,
    pub amount: f64,
    pub category: Option<String>,
}

/// Spending overview across all recorded expenses
#[derive(Debug, Clone, Serialize)]
pub struct SpendingOverview {
    pub categories: Vec<CategorySpending>,
    pub total_budget: f64,
    pub total_spent: f64,
    pub category_count: usize,
    pub expense_count: usize,
    pub recent: Vec<RecentExpense>,
}

impl SpendingOverview {
    /// Build the overview, listing at most `recent_limit` recent expenses
    pub fn generate(storage: &Storage, recent_limit: usize) -> SpendResult<Self> {
        let categories = storage.categories.get_all()?;
        let expenses = storage.expenses.get_all()?;

        let mut spent_by_category: HashMap<CategoryId, (f64, usize)> = HashMap::new();
        for expense in &expenses {
            let entry = spent_by_category
                .entry(expense.category_id)
                .or_insert((0.0, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total_spent = expenses.iter().fold(0.0, |acc, e| acc + e.amount);
        let total_budget = categories.iter().fold(0.0, |acc, c| acc + c.budget_or_zero());

        let rows = categories
            .iter()
            .map(|category| {
                let (spent, count) = spent_by_category
                    .get(&category.id)
                    .copied()
                    .unwrap_or((0.0, 0));
                CategorySpending {
                    name: category.name.clone(),
                    budget: category.budget_or_zero(),
                    spent,
                    expense_count: count,
                    percentage: if total_spent != 0.0 {
                        spent / total_spent * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        let names: HashMap<CategoryId, &str> = categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let recent = ExpenseService::new(storage)
            .recent(recent_limit)?
            .into_iter()
            .map(|e| RecentExpense {
                id: e.id,
                date: e.date,
                description: e.description,
                amount: e.amount,
                category: names.get(&e.category_id).map(|n| n.to_string()),
            })
            .collect();

        Ok(Self {
            categories: rows,
            total_budget,
            total_spent,
            category_count: categories.len(),
            expense_count: expenses.len(),
            recent,
        })
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let money = |amount: f64| format_amount(amount, currency);
        let mut output = String::new();

        output.push_str(&format_header("Spending Overview", 72));
        output.push('\n');
        output.push_str(&separator(72));
        output.push('\n');

        output.push_str(&format!(
            "{} categories, {} expenses\n\n",
            self.category_count, self.expense_count
        ));

        if self.categories.is_empty() {
            output.push_str("No categories yet. Add one with `spendsmart category add`.\n");
        } else {
            output.push_str(&format!(
                "{:<20} {:>14} {:>14} {:>8} {:>8}\n",
                "Category", "Budget", "Spent", "Count", "Share"
            ));
            output.push_str(&separator(72));
            output.push('\n');

            for row in &self.categories {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>14} {:>8} {:>8}\n",
                    truncate(&row.name, 20),
                    money(row.budget),
                    money(row.spent),
                    row.expense_count,
                    format_percentage(row.percentage)
                ));
            }

            output.push_str(&separator(72));
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>14} {:>14}\n",
                "TOTAL",
                money(self.total_budget),
                money(self.total_spent)
            ));
        }

        if !self.recent.is_empty() {
            output.push_str("\nRecent Expenses\n");
            for expense in &self.recent {
                output.push_str(&format!(
                    "  {:<10}  {:<16}  {:<24} {:>14}\n",
                    format_date(&expense.date, date_format),
                    truncate(expense.category.as_deref().unwrap_or("Unknown"), 16),
                    truncate(&expense.description, 24),
                    money(expense.amount)
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use crate::models::{Category, Expense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_overview() {
        let (_temp_dir, storage) = create_test_storage();
        let overview = SpendingOverview::generate(&storage, 10).unwrap();

        assert!(overview.categories.is_empty());
        assert_eq!(overview.total_spent, 0.0);
        assert_eq!(overview.expense_count, 0);
        assert!(overview
            .format_terminal("₹", "%Y-%m-%d")
            .contains("No categories yet"));
    }

    #[test]
    fn test_overview_spans_all_months() {
        let (_temp_dir, storage) = create_test_storage();
        let food = Category::new("Food", 5000.0);
        let rent = Category::new("Rent", 10000.0);
        storage.categories.upsert(food.clone()).unwrap();
        storage.categories.upsert(rent.clone()).unwrap();

        storage
            .expenses
            .upsert(Expense::with_description(food.id, 300.0, at(2024, 12, 30), "Old"))
            .unwrap();
        storage
            .expenses
            .upsert(Expense::with_description(food.id, 100.0, at(2025, 1, 2), "New"))
            .unwrap();
        storage
            .expenses
            .upsert(Expense::with_description(rent.id, 600.0, at(2025, 1, 1), "Rent"))
            .unwrap();

        let overview = SpendingOverview::generate(&storage, 2).unwrap();
        assert_eq!(overview.category_count, 2);
        assert_eq!(overview.expense_count, 3);
        assert_eq!(overview.total_budget, 15000.0);
        assert_eq!(overview.total_spent, 1000.0);

        assert_eq!(overview.categories[0].name, "Food");
        assert_eq!(overview.categories[0].spent, 400.0);
        assert_eq!(overview.categories[0].expense_count, 2);
        assert!((overview.categories[0].percentage - 40.0).abs() < 1e-9);

        assert_eq!(overview.recent.len(), 2);
        assert_eq!(overview.recent[0].description, "New");
        assert_eq!(overview.recent[1].category.as_deref(), Some("Rent"));

        let text = overview.format_terminal("₹", "%Y-%m-%d");
        assert!(text.contains("₹15,000.00"));
        assert!(text.contains("Recent Expenses"));
        assert!(text.contains("2025-01-02"));
    }

    #[test]
    fn test_recent_limit_zero_lists_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let food = Category::new("Food", 5000.0);
        storage.categories.upsert(food.clone()).unwrap();
        storage
            .expenses
            .upsert(Expense::with_description(food.id, 50.0, at(2025, 1, 3), "Tea"))
            .unwrap();

        let overview = SpendingOverview::generate(&storage, 0).unwrap();
        assert_eq!(overview.expense_count, 1);
        assert!(overview.recent.is_empty());
        assert!(!overview
            .format_terminal("₹", "%Y-%m-%d")
            .contains("Recent Expenses"));
    }

    #[test]
    fn test_recent_dates_survive_bad_pattern() {
        let (_temp_dir, storage) = create_test_storage();
        let food = Category::new("Food", 5000.0);
        storage.categories.upsert(food.clone()).unwrap();
        storage
            .expenses
            .upsert(Expense::with_description(food.id, 50.0, at(2025, 1, 3), "Tea"))
            .unwrap();

        let overview = SpendingOverview::generate(&storage, 5).unwrap();
        let text = overview.format_terminal("₹", "%Q");
        assert!(text.contains("2025-01-03"));
    }
}
