//! The two kinds of stored record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which record a file, error or audit entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Category,
    Expense,
}

impl RecordKind {
    /// Plural noun, also the stem of the record's data file
    pub fn plural(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Expense => "expenses",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Category => "Category",
            Self::Expense => "Expense",
        })
    }
}
