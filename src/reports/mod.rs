//! Reports module for SpendSmart
//!
//! Provides the monthly dashboard (budget pacing and risk for the current
//! month) and an all-time spending overview.

pub mod dashboard;
pub mod month_window;
pub mod overview;

pub use dashboard::{
    compute_for_window, compute_monthly_report, CategoryMetrics, MonthlyReport, RankedCategory,
    RISK_TOLERANCE, TOP_CATEGORY_COUNT,
};
pub use month_window::{days_in_month, is_leap_year, MonthWindow};
pub use overview::{CategorySpending, RecentExpense, SpendingOverview};
