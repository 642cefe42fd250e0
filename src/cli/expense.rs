//! Expense CLI commands

use std::collections::HashMap;

use clap::Subcommand;

use super::{parse_amount, parse_date_time};
use crate::config::settings::Settings;
use crate::display::{format_amount, format_date, format_expense_list};
use crate::error::SpendResult;
use crate::services::{CategoryService, ExpenseChanges, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (must be greater than zero)
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD); defaults to now
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full or short form)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (full or short form)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SpendResult<()> {
    let categories = CategoryService::new(storage);
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = parse_amount(&amount, "amount")?;
            let category = categories.require(&category)?;
            let date = date.as_deref().map(parse_date_time).transpose()?;

            let expense = service.create(amount, category.id, &description, date)?;
            println!(
                "Recorded {} in {}",
                format_amount(expense.amount, currency),
                category.name
            );
            println!("  Date: {}", format_date(&expense.date, &settings.date_format));
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { category, limit } => {
            let expenses = match category {
                Some(c) => {
                    let category = categories.require(&c)?;
                    let mut filed = storage.expenses.get_by_category(category.id)?;
                    filed.truncate(limit);
                    filed
                }
                None => service.recent(limit)?,
            };

            let names: HashMap<_, _> = categories
                .list()?
                .into_iter()
                .map(|c| (c.id, c.name))
                .collect();
            println!(
                "{}",
                format_expense_list(&expenses, &names, currency, &settings.date_format)
            );
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => {
            let expense = service.require(&id)?;

            let changes = ExpenseChanges {
                amount: amount.map(|a| parse_amount(&a, "amount")).transpose()?,
                category_id: category
                    .map(|c| categories.require(&c).map(|cat| cat.id))
                    .transpose()?,
                description,
                date: date.as_deref().map(parse_date_time).transpose()?,
            };

            if changes.is_empty() {
                println!("No changes specified. Use --amount, --category, --description, or --date.");
                return Ok(());
            }

            let updated = service.update(expense.id, changes)?;
            println!("Updated expense: {}", updated);
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.require(&id)?;
            let removed = service.delete(expense.id)?;
            println!("Deleted expense: {}", removed);
        }
    }

    Ok(())
}
