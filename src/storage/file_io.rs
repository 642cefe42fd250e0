//! Loading and saving the record files under `data/`
//!
//! Saves go to `<file>.json.tmp` first and are renamed over the target, so a
//! failed write leaves the previous file intact.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SpendError, SpendResult};
use crate::models::RecordKind;

/// On-disk shape of one record file
pub trait RecordFile: Serialize + DeserializeOwned + Default {
    const KIND: RecordKind;
}

/// Read a record file; a file that does not exist yet reads as empty
pub fn load_records<F: RecordFile>(path: &Path) -> SpendResult<F> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(F::default()),
        Err(e) => return Err(SpendError::io("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        SpendError::Storage(format!(
            "{} file {} is corrupt: {}",
            F::KIND.plural(),
            path.display(),
            e
        ))
    })
}

/// Replace a record file atomically, creating `data/` if needed
pub fn save_records<F: RecordFile>(path: &Path, records: &F) -> SpendResult<()> {
    let staging = path.with_extension("json.tmp");

    let result = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| write_synced(&staging, records))
        .and_then(|()| fs::rename(&staging, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&staging);
        return Err(SpendError::Storage(format!(
            "could not save {} to {}: {}",
            F::KIND.plural(),
            path.display(),
            e
        )));
    }

    tracing::trace!(kind = %F::KIND, path = %path.display(), "record file saved");
    Ok(())
}

fn write_synced<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Ledger {
        amounts: Vec<f64>,
    }

    impl RecordFile for Ledger {
        const KIND: RecordKind = RecordKind::Expense;
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger: Ledger = load_records(&temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("expenses.json");
        let ledger = Ledger {
            amounts: vec![3200.0, 45.5],
        };

        save_records(&path, &ledger).unwrap();

        assert_eq!(load_records::<Ledger>(&path).unwrap(), ledger);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_names_the_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "{\"amounts\": [1.0,").unwrap();

        let err = load_records::<Ledger>(&path).unwrap_err();
        assert!(
            matches!(&err, SpendError::Storage(msg) if msg.starts_with("expenses file")),
            "{}",
            err
        );
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        save_records(&path, &Ledger { amounts: vec![1.0] }).unwrap();

        // a directory where the staging file should go makes the write fail
        fs::create_dir(path.with_extension("json.tmp")).unwrap();
        let err = save_records(&path, &Ledger { amounts: vec![2.0] }).unwrap_err();

        assert!(err.to_string().contains("could not save expenses"));
        assert_eq!(load_records::<Ledger>(&path).unwrap().amounts, vec![1.0]);
    }
}
