//! Rate derivation functionality.
//!
//! This module derives the daily and hourly pay rates from an employee's
//! monthly basic salary. Every downstream amount (attendance earnings,
//! overtime, late and undertime pricing, unpaid leave) is priced off
//! these two rates.

use rust_decimal::Decimal;

/// Working days per month used to derive the daily rate.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Working hours per day used to derive the hourly rate.
pub const WORKING_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The pay rates derived from a monthly basic salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayRates {
    /// The monthly basic salary the rates derive from.
    pub monthly: Decimal,
    /// The daily rate (monthly / working days per month).
    pub daily: Decimal,
    /// The hourly rate (daily / working hours per day).
    pub hourly: Decimal,
}

/// Derives the daily rate from a monthly salary.
///
/// The division is exact decimal division; no rounding is applied here so
/// downstream multiplications do not accumulate rounding drift.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::daily_rate;
/// use rust_decimal::Decimal;
///
/// let daily = daily_rate(Decimal::new(22000, 0));
/// assert_eq!(daily, Decimal::new(1000, 0));
/// ```
pub fn daily_rate(monthly_salary: Decimal) -> Decimal {
    monthly_salary / WORKING_DAYS_PER_MONTH
}

/// Derives the hourly rate from a daily rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use rust_decimal::Decimal;
///
/// let hourly = hourly_rate(Decimal::new(1000, 0));
/// assert_eq!(hourly, Decimal::new(125, 0));
/// ```
pub fn hourly_rate(daily_rate: Decimal) -> Decimal {
    daily_rate / WORKING_HOURS_PER_DAY
}

/// Derives the full set of pay rates from a monthly salary.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's monthly basic salary
///
/// # Returns
///
/// A [`PayRates`] with the monthly, daily, and hourly rates.
pub fn derive_rates(monthly_salary: Decimal) -> PayRates {
    let daily = daily_rate(monthly_salary);
    PayRates {
        monthly: monthly_salary,
        daily,
        hourly: hourly_rate(daily),
    }
}
