//! Service layer for SpendSmart
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, duplicate checks, cascades, and audit logging.

pub mod category;
pub mod expense;

pub use category::CategoryService;
pub use expense::{ExpenseChanges, ExpenseService};
