//! JSON export functionality

use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{SpendError, SpendResult};
use crate::models::CategoryId;
use crate::reports::MonthlyReport;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// One exported expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDateTime,
    /// Category name; `None` if the category no longer exists
    pub category: Option<String>,
}

/// All expenses as export records, newest first
pub fn expense_records(storage: &Storage) -> SpendResult<Vec<ExpenseRecord>> {
    let names: HashMap<CategoryId, String> = storage
        .categories
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();

    Ok(ExpenseService::new(storage)
        .list()?
        .into_iter()
        .map(|e| ExpenseRecord {
            id: e.id.as_uuid().to_string(),
            category: names.get(&e.category_id).cloned(),
            description: e.description,
            amount: e.amount,
            date: e.date,
        })
        .collect())
}

/// Export every expense to a JSON array
pub fn export_expenses_json<W: Write>(storage: &Storage, writer: &mut W) -> SpendResult<()> {
    let records = expense_records(storage)?;
    serde_json::to_writer_pretty(&mut *writer, &records)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;

    tracing::debug!(count = records.len(), "expenses exported");
    Ok(())
}

/// Export a monthly report to JSON
pub fn export_report_json<W: Write>(report: &MonthlyReport, writer: &mut W) -> SpendResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use crate::models::{Category, CategorySnapshot, Expense};
    use crate::reports::compute_monthly_report;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_expense_export() {
        let (_temp_dir, storage) = create_test_storage();
        let food = Category::new("Food", 5000.0);
        storage.categories.upsert(food.clone()).unwrap();

        let groceries = Expense::with_description(food.id, 3200.0, at(2025, 1, 5), "Groceries");
        let orphan = Expense::with_description(CategoryId::new(), 10.0, at(2025, 1, 6), "Orphan");
        storage.expenses.upsert(groceries.clone()).unwrap();
        storage.expenses.upsert(orphan).unwrap();

        let records = expense_records(&storage).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "Orphan");
        assert_eq!(records[0].category, None);
        assert_eq!(records[1].id, groceries.id.as_uuid().to_string());
        assert_eq!(records[1].category.as_deref(), Some("Food"));

        let mut buffer = Vec::new();
        export_expenses_json(&storage, &mut buffer).unwrap();
        let parsed: Vec<ExpenseRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, records);

        let raw: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(raw[0]["category"].is_null());
        assert_eq!(raw[1]["date"], "2025-01-05T09:15:00");
    }

    #[test]
    fn test_empty_expense_export() {
        let (_temp_dir, storage) = create_test_storage();
        let mut buffer = Vec::new();
        export_expenses_json(&storage, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }

    #[test]
    fn test_report_export() {
        let reference = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let categories = vec![CategorySnapshot::new("Food", 3100.0).with_expense(2000.0, reference)];
        let report = compute_monthly_report(reference, &categories);

        let mut buffer = Vec::new();
        export_report_json(&report, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["month_start"], "2025-01-01");
        assert_eq!(value["total_spent"], 2000.0);
        assert_eq!(value["top_category"], "Food");
        assert_eq!(value["risk_categories"][0]["name"], "Food");
    }
}
