//! Attendance earnings calculation functionality.
//!
//! This module counts the valid attendance days in a pay period and prices
//! them at the daily rate to produce the base earnings for the period.

use rust_decimal::Decimal;

use crate::models::AttendanceRecord;

/// The result of aggregating attendance into base earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendancePayResult {
    /// The number of valid attendance days (clock-in present).
    pub days_worked: u32,
    /// The base earnings for the period (days worked x daily rate).
    pub gross_earnings: Decimal,
}

/// Aggregates attendance records into base earnings for the period.
///
/// A record counts as a worked day when its clock-in is present; a missing
/// clock-out leaves the day payable. Zero valid days is not an error here;
/// the caller decides whether to warn about an empty period.
///
/// # Arguments
///
/// * `records` - The attendance records for the pay period
/// * `daily_rate` - The daily rate derived from the monthly salary
///
/// # Returns
///
/// An [`AttendancePayResult`] with the day count and earnings.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_attendance_pay;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     employee_id: 10001,
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0),
///     clock_out: NaiveTime::from_hms_opt(17, 0, 0),
/// }];
///
/// let result = calculate_attendance_pay(&records, Decimal::new(1000, 0));
/// assert_eq!(result.days_worked, 1);
/// assert_eq!(result.gross_earnings, Decimal::new(1000, 0));
/// ```
pub fn calculate_attendance_pay(
    records: &[AttendanceRecord],
    daily_rate: Decimal,
) -> AttendancePayResult {
    let days_worked = records.iter().filter(|r| r.is_valid()).count() as u32;
    let gross_earnings = Decimal::from(days_worked) * daily_rate;

    AttendancePayResult {
        days_worked,
        gross_earnings,
    }
}
