//! Audit log entries
//!
//! Every create, update and delete of a category or expense is recorded with
//! JSON snapshots of the record so `spendsmart history` can show what changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::diff::summarize_changes;
use crate::models::{Category, Expense, RecordKind};

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// A stored record whose changes go to the audit log
pub trait Audited: Serialize {
    const KIND: RecordKind;

    /// Identifier shown in history output
    fn audit_id(&self) -> String;

    /// What a person would call the record
    fn audit_label(&self) -> String;
}

impl Audited for Category {
    const KIND: RecordKind = RecordKind::Category;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> String {
        self.name.clone()
    }
}

impl Audited for Expense {
    const KIND: RecordKind = RecordKind::Expense;

    fn audit_id(&self) -> String {
        self.id.to_string()
    }

    fn audit_label(&self) -> String {
        if self.description.is_empty() {
            format!("{:.2}", self.amount)
        } else {
            self.description.clone()
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub kind: RecordKind,
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    /// `field: old -> new` pairs, only for updates that changed something
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    pub fn created<T: Audited>(record: &T) -> Self {
        Self::about(Operation::Create, record, None, snapshot(record))
    }

    /// Labelled by the record's state after the change
    pub fn updated<T: Audited>(before: &T, after: &T) -> Self {
        let old = snapshot(before);
        let new = snapshot(after);
        let changes = match (&old, &new) {
            (Some(old), Some(new)) => summarize_changes(old, new),
            _ => None,
        };

        Self {
            changes,
            ..Self::about(Operation::Update, after, old, new)
        }
    }

    pub fn deleted<T: Audited>(record: &T) -> Self {
        Self::about(Operation::Delete, record, snapshot(record), None)
    }

    fn about<T: Audited>(
        operation: Operation,
        record: &T,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            kind: T::KIND,
            id: record.audit_id(),
            label: record.audit_label(),
            before,
            after,
            changes: None,
        }
    }

    /// Render for `spendsmart history`
    pub fn describe(&self) -> String {
        let mut line = format!(
            "{}  {} {} '{}' {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.id,
            self.label,
            self.operation.past_tense()
        );
        if let Some(changes) = &self.changes {
            line.push_str("\n    ");
            line.push_str(changes);
        }
        line
    }
}

fn snapshot<T: Serialize>(record: &T) -> Option<Value> {
    serde_json::to_value(record).ok()
}
