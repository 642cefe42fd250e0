//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::display::category::{format_category_details, format_category_list};
use crate::display::format_amount;
use crate::error::SpendResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Monthly budget (e.g., "5000" or "5000.00"); defaults to 0
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New monthly budget
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Delete a category and all of its expenses
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> SpendResult<()> {
    let service = CategoryService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            println!("{}", format_category_list(&categories, currency));
        }

        CategoryCommands::Add { name, budget } => {
            let budget = match budget {
                Some(b) => parse_amount(&b, "budget")?,
                None => 0.0,
            };

            let category = service.create(&name, budget)?;
            println!("Created category: {}", category.name);
            println!("  Budget: {}", format_amount(category.budget_or_zero(), currency));
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service.require(&category)?;
            let count = service.expense_count(cat.id)?;
            print!("{}", format_category_details(&cat, count, currency));
        }

        CategoryCommands::Edit {
            category,
            name,
            budget,
        } => {
            let cat = service.require(&category)?;

            if name.is_none() && budget.is_none() {
                println!("No changes specified. Use --name or --budget.");
                return Ok(());
            }

            let budget = budget.map(|b| parse_amount(&b, "budget")).transpose()?;
            let updated = service.update(cat.id, name.as_deref(), budget)?;
            println!("Updated category: {}", updated.name);
            println!("  Budget: {}", format_amount(updated.budget_or_zero(), currency));
        }

        CategoryCommands::Delete { category } => {
            let cat = service.require(&category)?;
            let removed = service.delete(cat.id)?;
            println!("Deleted category: {}", cat.name);
            if removed > 0 {
                println!(
                    "  Removed {} expense{}",
                    removed,
                    if removed == 1 { "" } else { "s" }
                );
            }
        }
    }

    Ok(())
}
