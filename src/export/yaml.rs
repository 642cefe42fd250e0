//! YAML export functionality

use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::reports::MonthlyReport;

/// Export a monthly report to YAML
pub fn export_report_yaml<W: Write>(report: &MonthlyReport, writer: &mut W) -> SpendResult<()> {
    writeln!(
        writer,
        "# SpendSmart dashboard for {}",
        report.month_start.format("%B %Y")
    )
    .map_err(|e| SpendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, report).map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySnapshot;
    use crate::reports::compute_monthly_report;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let reference = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let categories = vec![
            CategorySnapshot::new("Food", 2900.0).with_expense(100.0, reference),
            CategorySnapshot::new("Rent", 0.0),
        ];
        let report = compute_monthly_report(reference, &categories);

        let mut buffer = Vec::new();
        export_report_yaml(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# SpendSmart dashboard for February 2024"));
        assert!(text.contains("days_in_month: 29"));

        let parsed: MonthlyReport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.top_category.as_deref(), Some("Food"));
        assert_eq!(parsed.categories.len(), 2);
    }
}
