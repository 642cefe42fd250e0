//! Append-only audit log, one JSON object per line

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendError, SpendResult};

use super::entry::AuditEntry;

/// Handle on `audit.log`; the file is created by the first write
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append `entry` with a single write so a crash never leaves half a line
    pub fn log(&self, entry: &AuditEntry) -> SpendResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| SpendError::Audit(format!("cannot encode {} entry: {}", entry.kind, e)))?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|e| {
                SpendError::Audit(format!("cannot append to {}: {}", self.path.display(), e))
            })?;

        tracing::trace!(
            operation = ?entry.operation,
            kind = %entry.kind,
            id = %entry.id,
            "audit entry written"
        );
        Ok(())
    }

    /// Every entry, oldest first; a missing log reads as empty
    pub fn read_all(&self) -> SpendResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SpendError::Audit(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    SpendError::Audit(format!(
                        "line {} of {} is not an audit entry: {}",
                        index + 1,
                        self.path.display(),
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SpendResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
