//! Calendar month window
//!
//! The dashboard looks at one calendar month at a time: the half-open range
//! `[first_day, next_month_start)` around a reference date.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, or 0 for a month outside 1..=12
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The month containing a reference date, and how far into it we are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    /// First day of the month (inclusive)
    pub first_day: NaiveDate,
    /// First day of the following month (exclusive)
    pub next_month_start: NaiveDate,
    /// Length of the month in days
    pub days_in_month: u32,
    /// Day-of-month of the reference date, 1-based
    pub days_passed: u32,
}

impl MonthWindow {
    /// Build the window for the month containing `reference_date`
    pub fn for_date(reference_date: NaiveDate) -> Self {
        let days_passed = reference_date.day();
        let days_in_month = days_in_month(reference_date.year(), reference_date.month());

        let first_day = reference_date
            .checked_sub_days(Days::new(u64::from(days_passed - 1)))
            .unwrap_or(reference_date);

        // Offset by day count; stepping the month number breaks at December.
        let next_month_start = first_day
            .checked_add_days(Days::new(u64::from(days_in_month)))
            .unwrap_or(NaiveDate::MAX);

        Self {
            first_day,
            next_month_start,
            days_in_month,
            days_passed,
        }
    }

    /// Is `date` inside `[first_day, next_month_start)`?
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date < self.next_month_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_february_length() {
        assert_eq!(MonthWindow::for_date(date(2024, 2, 15)).days_in_month, 29);
        assert_eq!(MonthWindow::for_date(date(2023, 2, 15)).days_in_month, 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_invalid_month_has_no_days() {
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_window_bounds() {
        let window = MonthWindow::for_date(date(2025, 1, 10));
        assert_eq!(window.first_day, date(2025, 1, 1));
        assert_eq!(window.next_month_start, date(2025, 2, 1));
        assert_eq!(window.days_in_month, 31);
        assert_eq!(window.days_passed, 10);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let window = MonthWindow::for_date(date(2024, 12, 31));
        assert_eq!(window.first_day, date(2024, 12, 1));
        assert_eq!(window.next_month_start, date(2025, 1, 1));
        assert_eq!(window.days_passed, 31);
    }

    #[test]
    fn test_leap_february_window() {
        let window = MonthWindow::for_date(date(2024, 2, 29));
        assert_eq!(window.next_month_start, date(2024, 3, 1));
        assert_eq!(window.days_passed, 29);
    }

    #[test]
    fn test_contains_is_half_open() {
        let window = MonthWindow::for_date(date(2025, 4, 20));
        assert!(window.contains(date(2025, 4, 1)));
        assert!(window.contains(date(2025, 4, 30)));
        assert!(!window.contains(date(2025, 5, 1)));
        assert!(!window.contains(date(2025, 3, 31)));
    }
}
