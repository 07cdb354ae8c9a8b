//! Unpaid leave deduction functionality.
//!
//! This module counts the approved unpaid-leave days in a period and prices
//! them at the daily rate. Paid leave types (sick, vacation, emergency)
//! never reduce pay and are ignored here.

use rust_decimal::Decimal;

use crate::models::LeaveRecord;

/// The result of pricing a period's unpaid leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveDeductionResult {
    /// Approved unpaid leave days.
    pub unpaid_days: u32,
    /// The deduction (days x daily rate).
    pub deduction: Decimal,
}

/// Prices the approved unpaid leave for a period.
///
/// A record reduces pay only when it is approved and its type matches
/// "Unpaid" case-insensitively. Pending and rejected requests are
/// ignored, as are approved requests of any paid type.
///
/// # Arguments
///
/// * `records` - The leave records overlapping the pay period
/// * `daily_rate` - The daily rate derived from the monthly salary
///
/// # Returns
///
/// A [`LeaveDeductionResult`] with the unpaid day count and deduction.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_leave_deduction;
/// use payroll_engine::models::{LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![LeaveRecord {
///     employee_id: 10001,
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
///     leave_type: "Unpaid".to_string(),
///     days: 2,
///     status: LeaveStatus::Approved,
/// }];
///
/// let result = calculate_leave_deduction(&records, Decimal::new(1000, 0));
/// assert_eq!(result.unpaid_days, 2);
/// assert_eq!(result.deduction, Decimal::new(2000, 0));
/// ```
pub fn calculate_leave_deduction(
    records: &[LeaveRecord],
    daily_rate: Decimal,
) -> LeaveDeductionResult {
    let unpaid_days: u32 = records
        .iter()
        .filter(|r| r.is_approved() && r.is_unpaid())
        .map(|r| r.days)
        .sum();

    let deduction = Decimal::from(unpaid_days) * daily_rate;

    LeaveDeductionResult {
        unpaid_days,
        deduction,
    }
}
