//! Core data models for SpendSmart
//!
//! Categories carry a monthly budget; expenses are dated amounts filed
//! under exactly one category.

pub mod category;
pub mod expense;
pub mod ids;
pub mod kind;
pub mod snapshot;

pub use category::{Category, CategoryValidationError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::{CategoryId, ExpenseId};
pub use kind::RecordKind;
pub use snapshot::{CategorySnapshot, ExpenseEvent};
