//! Monthly Dashboard Report
//!
//! Turns a snapshot of categories and their expenses into the pacing view for
//! one calendar month: how much of the budget is gone, how fast money is
//! leaving, where the month will land at the current rate, and which
//! categories are running ahead of their linear allowance.
//!
//! [`compute_monthly_report`] is pure: it performs no I/O and the same inputs
//! always produce the same report. [`MonthlyReport::generate`] is the thin
//! wrapper that pulls the snapshot out of storage first.

use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month_window::MonthWindow;
use crate::display::report::{format_amount, format_bar, format_header, separator};
use crate::error::{SpendError, SpendResult};
use crate::models::CategorySnapshot;
use crate::storage::Storage;

/// A category is at risk once spending passes this multiple of its
/// expected-to-date amount.
pub const RISK_TOLERANCE: f64 = 1.10;

/// Number of entries in the top spenders list
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Month-to-date figures for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    /// Category name
    pub name: String,
    /// Monthly budget (missing budgets count as zero)
    pub budget: f64,
    /// Spent inside the month window
    pub spent: f64,
    /// Budget pro-rated by the share of the month elapsed
    pub expected_to_date: f64,
    /// Spending more than 10% ahead of the linear pace
    pub at_risk: bool,
}

/// An entry in the top spenders list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub name: String,
    pub spent: f64,
    pub budget: f64,
}

/// Monthly dashboard report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// First day of the reported month
    pub month_start: NaiveDate,
    /// First day of the following month
    pub next_month_start: NaiveDate,
    /// Per-category figures, in input order
    pub categories: Vec<CategoryMetrics>,
    /// Sum of all category budgets
    pub total_budget: f64,
    /// Sum of month-to-date spend
    pub total_spent: f64,
    /// Budget left; negative once the month is overspent
    pub remaining: f64,
    /// Day of month of the reference date
    pub days_passed: u32,
    /// Length of the month
    pub days_in_month: u32,
    /// Budget-implied daily allowance
    pub daily_budget: f64,
    /// Actual average spend per elapsed day
    pub daily_spend_avg: f64,
    /// Month total if the current daily average holds
    pub projected_eom_spend: f64,
    /// `daily_spend_avg - daily_budget`; positive means overspending pace
    pub burn_variance: f64,
    /// Highest spender; first one wins a tie
    pub top_category: Option<String>,
    /// Up to three highest spenders, highest first
    pub top_categories: Vec<RankedCategory>,
    /// At-risk categories, in input order
    pub risk_categories: Vec<CategoryMetrics>,
}

/// Compute the dashboard for the month containing `reference_date`.
///
/// `categories` should already be in display order (by name); that order
/// decides ties for the top category and the top spenders list. Expenses
/// outside the month are ignored, so a caller may pass every expense it has.
pub fn compute_monthly_report(
    reference_date: NaiveDate,
    categories: &[CategorySnapshot],
) -> MonthlyReport {
    compute_for_window(MonthWindow::for_date(reference_date), categories)
}

/// Compute the dashboard for an explicit month window.
///
/// Zero-length windows are tolerated: every rate that would divide by zero
/// comes out as 0.
pub fn compute_for_window(window: MonthWindow, categories: &[CategorySnapshot]) -> MonthlyReport {
    let days_in_month = f64::from(window.days_in_month);
    let days_passed = f64::from(window.days_passed);

    let metrics: Vec<CategoryMetrics> = categories
        .iter()
        .map(|category| {
            let budget = category.budget_or_zero();
            let spent = category
                .expenses
                .iter()
                .filter(|event| window.contains(event.date))
                .fold(0.0, |acc, event| acc + event.amount);

            let expected_to_date = if window.days_in_month > 0 {
                budget * days_passed / days_in_month
            } else {
                0.0
            };

            CategoryMetrics {
                name: category.name.clone(),
                budget,
                spent,
                expected_to_date,
                at_risk: spent > expected_to_date * RISK_TOLERANCE,
            }
        })
        .collect();

    // Explicit folds from +0.0 so an empty month totals exactly zero.
    let total_budget = metrics.iter().fold(0.0, |acc, m| acc + m.budget);
    let total_spent = metrics.iter().fold(0.0, |acc, m| acc + m.spent);
    let remaining = total_budget - total_spent;

    let daily_budget = if window.days_in_month > 0 {
        total_budget / days_in_month
    } else {
        0.0
    };
    let daily_spend_avg = if window.days_passed > 0 {
        total_spent / days_passed
    } else {
        0.0
    };
    let projected_eom_spend = daily_spend_avg * days_in_month;
    let burn_variance = daily_spend_avg - daily_budget;

    let mut top: Option<&CategoryMetrics> = None;
    for candidate in &metrics {
        match top {
            Some(best) if candidate.spent <= best.spent => {}
            _ => top = Some(candidate),
        }
    }
    let top_category = top.map(|m| m.name.clone());

    let risk_categories: Vec<CategoryMetrics> =
        metrics.iter().filter(|m| m.at_risk).cloned().collect();

    let mut top_categories: Vec<RankedCategory> = metrics
        .iter()
        .map(|m| RankedCategory {
            name: m.name.clone(),
            spent: m.spent,
            budget: m.budget,
        })
        .collect();
    // sort_by is stable, equal spend keeps input order
    top_categories.sort_by(|a, b| b.spent.total_cmp(&a.spent));
    top_categories.truncate(TOP_CATEGORY_COUNT);

    MonthlyReport {
        month_start: window.first_day,
        next_month_start: window.next_month_start,
        categories: metrics,
        total_budget,
        total_spent,
        remaining,
        days_passed: window.days_passed,
        days_in_month: window.days_in_month,
        daily_budget,
        daily_spend_avg,
        projected_eom_spend,
        burn_variance,
        top_category,
        top_categories,
        risk_categories,
    }
}

impl MonthlyReport {
    /// Generate the dashboard from stored categories and expenses
    pub fn generate(storage: &Storage, reference_date: NaiveDate) -> SpendResult<Self> {
        let snapshot = storage.snapshot()?;
        let report = compute_monthly_report(reference_date, &snapshot);

        tracing::debug!(
            %reference_date,
            categories = report.categories.len(),
            total_spent = report.total_spent,
            at_risk = report.risk_categories.len(),
            "computed monthly dashboard"
        );

        Ok(report)
    }

    /// Is the current pace heading over budget?
    pub fn is_overspending_pace(&self) -> bool {
        self.burn_variance > 0.0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |amount: f64| format_amount(amount, currency);
        let mut output = String::new();

        output.push_str(&format_header(
            &format!("Dashboard: {}", self.month_start.format("%B %Y")),
            72,
        ));
        output.push('\n');
        output.push_str(&separator(72));
        output.push('\n');

        output.push_str(&format!("{:<24} {:>16}\n", "Total Budget:", money(self.total_budget)));
        output.push_str(&format!("{:<24} {:>16}\n", "Spent This Month:", money(self.total_spent)));
        output.push_str(&format!("{:<24} {:>16}\n", "Remaining:", money(self.remaining)));
        output.push_str(&format!(
            "{:<24} {:>16}\n",
            "Day of Month:",
            format!("{} / {}", self.days_passed, self.days_in_month)
        ));
        output.push('\n');

        output.push_str(&format!("{:<24} {:>16}\n", "Daily Budget:", money(self.daily_budget)));
        output.push_str(&format!("{:<24} {:>16}\n", "Daily Spend (avg):", money(self.daily_spend_avg)));
        output.push_str(&format!(
            "{:<24} {:>16}\n",
            "Projected Month End:",
            money(self.projected_eom_spend)
        ));
        output.push_str(&format!(
            "{:<24} {:>16}  {}\n",
            "Burn Variance:",
            money(self.burn_variance),
            if self.is_overspending_pace() {
                "over pace"
            } else {
                "on pace"
            }
        ));

        if let Some(top) = &self.top_category {
            output.push_str(&format!("{:<24} {:>16}\n", "Top Category:", top));
        }

        if !self.categories.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>14} {:>14} {:>14}  {:<12}\n",
                "Category", "Budget", "Spent", "Expected", "Usage"
            ));
            output.push_str(&separator(72));
            output.push('\n');

            for category in &self.categories {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>14} {:>14}  {}{}\n",
                    category.name,
                    money(category.budget),
                    money(category.spent),
                    money(category.expected_to_date),
                    format_bar(category.spent, category.budget, 10),
                    if category.at_risk { " !" } else { "" }
                ));
            }
        }

        if !self.top_categories.is_empty() {
            output.push_str("\nTop Spenders\n");
            for (rank, entry) in self.top_categories.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. {:<20} {:>14} of {}\n",
                    rank + 1,
                    entry.name,
                    money(entry.spent),
                    money(entry.budget)
                ));
            }
        }

        output.push('\n');
        if self.risk_categories.is_empty() {
            output.push_str("No categories are ahead of their budget pace.\n");
        } else {
            output.push_str("At Risk\n");
            for risk in &self.risk_categories {
                output.push_str(&format!(
                    "  {:<20} spent {} vs {} expected by today\n",
                    risk.name,
                    money(risk.spent),
                    money(risk.expected_to_date)
                ));
            }
        }

        output
    }

    /// Export the per-category figures to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Month",
            "Category",
            "Budget",
            "Spent",
            "Expected To Date",
            "At Risk",
        ])?;

        let month = self.month_start.format("%Y-%m").to_string();
        for category in &self.categories {
            csv.write_record([
                month.clone(),
                category.name.clone(),
                format!("{:.2}", category.budget),
                format!("{:.2}", category.spent),
                format!("{:.2}", category.expected_to_date),
                if category.at_risk { "yes" } else { "no" }.to_string(),
            ])?;
        }

        csv.write_record([
            month,
            "TOTAL".to_string(),
            format!("{:.2}", self.total_budget),
            format!("{:.2}", self.total_spent),
            String::new(),
            String::new(),
        ])?;

        csv.flush()
            .map_err(|e| SpendError::Export(e.to_string()))?;
        Ok(())
    }
}
