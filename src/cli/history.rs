//! Audit history command

use crate::error::SpendResult;
use crate::storage::Storage;

/// Print the most recent audit log entries, newest last
pub fn handle_history_command(storage: &Storage, limit: usize) -> SpendResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.describe());
    }

    Ok(())
}
