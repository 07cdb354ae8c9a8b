//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the calculation
//! window for payroll calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents a pay period with its inclusive date range.
///
/// A pay period defines the time window for a payroll calculation. All
/// attendance, overtime, and leave records are scoped to this window.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// };
///
/// assert!(period.is_valid());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// assert_eq!(period.working_days(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Returns true if the period is well formed, i.e. it does not end
    /// before it starts. A single-day period is valid.
    pub fn is_valid(&self) -> bool {
        self.end_date >= self.start_date
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to check.
    ///
    /// # Returns
    ///
    /// `true` if the date is within the pay period (inclusive), `false` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Counts the working days (Monday through Friday) in the period,
    /// inclusive of both ends.
    ///
    /// Returns zero for an inverted period.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// // June 2024 has 20 weekdays.
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    /// };
    /// assert_eq!(period.working_days(), 20);
    /// ```
    pub fn working_days(&self) -> u32 {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u32
    }
}
