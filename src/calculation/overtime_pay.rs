//! Overtime pay calculation functionality.
//!
//! This module sums the approved overtime hours in a period and prices
//! them at the hourly rate with the overtime premium applied.

use rust_decimal::Decimal;

use crate::models::OvertimeRecord;

/// Returns the overtime premium multiplier.
///
/// Approved overtime is paid at 125% of the derived hourly rate.
pub fn overtime_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

/// The result of pricing a period's approved overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimePayResult {
    /// Total approved overtime hours.
    pub total_hours: Decimal,
    /// Overtime pay (hours x hourly rate x premium multiplier).
    pub overtime_pay: Decimal,
}

/// Prices the approved overtime requests for a period.
///
/// Unapproved requests contribute nothing regardless of their hours. The
/// records are expected to be pre-scoped to the pay period by the caller.
///
/// # Arguments
///
/// * `requests` - The overtime requests overlapping the pay period
/// * `hourly_rate` - The hourly rate derived from the monthly salary
///
/// # Returns
///
/// An [`OvertimePayResult`] with the approved hours and premium pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_pay;
/// use payroll_engine::models::OvertimeRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let requests = vec![OvertimeRecord {
///     employee_id: 10001,
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     hours: Decimal::new(4, 0),
///     approved: true,
/// }];
///
/// let result = calculate_overtime_pay(&requests, Decimal::new(100, 0));
/// // 4 x 100 x 1.25 = 500
/// assert_eq!(result.overtime_pay, Decimal::new(500, 0));
/// ```
pub fn calculate_overtime_pay(
    requests: &[OvertimeRecord],
    hourly_rate: Decimal,
) -> OvertimePayResult {
    let total_hours: Decimal = requests
        .iter()
        .filter(|r| r.approved)
        .map(|r| r.hours)
        .sum();

    let overtime_pay = total_hours * hourly_rate * overtime_multiplier();

    OvertimePayResult {
        total_hours,
        overtime_pay,
    }
}
