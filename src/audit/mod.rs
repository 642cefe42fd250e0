//! Audit logging for SpendSmart
//!
//! Every create, update and delete of a category or expense is appended to
//! `audit.log` as one JSON object per line, with the record's state before
//! and after the change.

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{AuditEntry, Audited, Operation};
pub use logger::AuditLogger;
