//! Category display formatting

use crate::display::report::format_amount;
use crate::models::Category;

/// Format a table of categories with their budgets
pub fn format_category_list(categories: &[Category], currency: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'spendsmart category add <name> --budget <amount>' to create one."
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>14}\n",
        "ID",
        "Name",
        "Budget",
        name_width = name_width
    ));
    output.push_str(&format!("{}\n", "-".repeat(12 + 2 + name_width + 2 + 14)));

    for category in categories {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>14}\n",
            category.id.to_string(),
            category.name,
            format_amount(category.budget_or_zero(), currency),
            name_width = name_width
        ));
    }

    output
}

/// Format a single category's details
pub fn format_category_details(category: &Category, expense_count: usize, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:       {}\n", category.id));
    output.push_str(&format!(
        "  Budget:   {}\n",
        format_amount(category.budget_or_zero(), currency)
    ));
    output.push_str(&format!("  Expenses: {}\n", expense_count));
    output.push_str(&format!(
        "  Created:  {}\n",
        category.created_at.format("%Y-%m-%d %H:%M")
    ));
    output
}
