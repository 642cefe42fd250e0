//! Error type shared by the library layers
//!
//! The report engine never fails; everything that touches disk, parses user
//! input or looks records up returns `SpendResult`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::RecordKind;

/// Everything that can go wrong outside the report engine
#[derive(Error, Debug)]
pub enum SpendError {
    /// `config.json` is unreadable or holds an unusable value
    #[error("Configuration error: {0}")]
    Config(String),

    /// A filesystem call on a known path failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A category or expense data file could not be loaded or saved
    #[error("Storage error: {0}")]
    Storage(String),

    /// The audit log could not be appended to or parsed
    #[error("Audit log error: {0}")]
    Audit(String),

    /// User input or a record failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} not found: {identifier}")]
    NotFound {
        kind: RecordKind,
        identifier: String,
    },

    /// Category names are unique
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Writing a report or export failed
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendError {
    pub fn not_found(kind: RecordKind, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            identifier: identifier.into(),
        }
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

impl From<csv::Error> for SpendError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for SpendSmart operations
pub type SpendResult<T> = Result<T, SpendError>;
