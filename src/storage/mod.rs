//! Storage layer for SpendSmart
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. `Storage::snapshot` turns the persisted records into the input
//! the monthly report engine expects.

pub mod categories;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use init::seed_sample_data;

use std::fmt::Display;

use crate::audit::{AuditEntry, AuditLogger, Audited};
use crate::config::paths::SpendPaths;
use crate::error::{SpendError, SpendResult};
use crate::models::{CategorySnapshot, ExpenseEvent, RecordKind};

pub(crate) fn lock_error(e: impl Display) -> SpendError {
    SpendError::Storage(format!("Failed to acquire lock: {}", e))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendPaths,
    pub categories: CategoryRepository,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendPaths) -> Result<Self, SpendError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.records_file(RecordKind::Category)),
            expenses: ExpenseRepository::new(paths.records_file(RecordKind::Expense)),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SpendError> {
        self.categories.load()?;
        self.expenses.load()?;
        tracing::debug!(
            categories = self.categories.count()?,
            expenses = self.expenses.count()?,
            "storage loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SpendError> {
        self.categories.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (settings written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Categories ordered by name, each carrying every one of its expense
    /// events; the report engine applies the month filter itself.
    pub fn snapshot(&self) -> SpendResult<Vec<CategorySnapshot>> {
        self.categories
            .get_all()?
            .into_iter()
            .map(|category| {
                let expenses = self
                    .expenses
                    .get_by_category(category.id)?
                    .iter()
                    .map(|e| ExpenseEvent::new(e.amount, e.day()))
                    .collect();

                Ok(CategorySnapshot {
                    id: category.id,
                    name: category.name,
                    budget: category.budget,
                    expenses,
                })
            })
            .collect()
    }

    pub fn log_created<T: Audited>(&self, record: &T) -> SpendResult<()> {
        self.audit.log(&AuditEntry::created(record))
    }

    pub fn log_updated<T: Audited>(&self, before: &T, after: &T) -> SpendResult<()> {
        self.audit.log(&AuditEntry::updated(before, after))
    }

    pub fn log_deleted<T: Audited>(&self, record: &T) -> SpendResult<()> {
        self.audit.log(&AuditEntry::deleted(record))
    }
}
