//! Expense display formatting

use std::collections::HashMap;

use crate::display::report::{format_amount, format_date, truncate};
use crate::models::{CategoryId, Expense};

/// Format a table of expenses, newest first as given
pub fn format_expense_list(
    expenses: &[Expense],
    category_names: &HashMap<CategoryId, String>,
    currency: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<16}  {:<30}  {:>14}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&format!("{}\n", "-".repeat(90)));

    for expense in expenses {
        let category = category_names
            .get(&expense.category_id)
            .map(String::as_str)
            .unwrap_or("Unknown");

        output.push_str(&format!(
            "{:<12}  {:<10}  {:<16}  {:<30}  {:>14}\n",
            expense.id.to_string(),
            format_date(&expense.date, date_format),
            truncate(category, 16),
            truncate(&expense.description, 30),
            format_amount(expense.amount, currency)
        ));
    }

    output
}
