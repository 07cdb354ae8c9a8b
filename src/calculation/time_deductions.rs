//! Late and undertime deduction functionality.
//!
//! This module prices the minutes an employee arrived after the grace
//! threshold or left before the standard clock-out, over a period's
//! attendance records.
//!
//! The late rule is a cliff, not a taper: arriving at or before 08:15
//! costs nothing, but arriving later charges the whole gap back to 08:00.
//! An employee clocking in at 08:16 is charged 16 minutes, not 1.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::AttendanceRecord;

/// Minutes per hour, used to price minute counts at an hourly rate.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Returns the standard clock-in time (08:00).
///
/// Late minutes are measured from this time once the grace threshold
/// is crossed.
pub fn standard_clock_in() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("08:00:00 is a valid time")
}

/// Returns the end of the grace window (08:15).
///
/// Clocking in at exactly 08:15:00 is still free; the first chargeable
/// second is 08:15:01.
pub fn grace_period_end() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 15, 0).expect("08:15:00 is a valid time")
}

/// Returns the standard clock-out time (17:00).
pub fn standard_clock_out() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("17:00:00 is a valid time")
}

/// Returns the chargeable late minutes for a clock-in time.
///
/// Zero within the grace window; otherwise the whole gap from the standard
/// clock-in, in minutes.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::late_minutes;
/// use chrono::NaiveTime;
///
/// assert_eq!(late_minutes(NaiveTime::from_hms_opt(8, 15, 0).unwrap()), 0);
/// assert_eq!(late_minutes(NaiveTime::from_hms_opt(8, 20, 0).unwrap()), 20);
/// ```
pub fn late_minutes(clock_in: NaiveTime) -> i64 {
    if clock_in > grace_period_end() {
        (clock_in - standard_clock_in()).num_minutes()
    } else {
        0
    }
}

/// Returns the undertime minutes for a clock-out time.
///
/// Zero at or after the standard clock-out; otherwise the minutes short
/// of 17:00.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::undertime_minutes;
/// use chrono::NaiveTime;
///
/// assert_eq!(undertime_minutes(NaiveTime::from_hms_opt(17, 0, 0).unwrap()), 0);
/// assert_eq!(undertime_minutes(NaiveTime::from_hms_opt(16, 30, 0).unwrap()), 30);
/// ```
pub fn undertime_minutes(clock_out: NaiveTime) -> i64 {
    if clock_out < standard_clock_out() {
        (standard_clock_out() - clock_out).num_minutes()
    } else {
        0
    }
}

/// The result of pricing late and undertime minutes over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDeductionResult {
    /// Total chargeable late minutes across the period.
    pub late_minutes: i64,
    /// Total undertime minutes across the period.
    pub undertime_minutes: i64,
    /// The late deduction (minutes / 60 x hourly rate, summed per day).
    pub late_deduction: Decimal,
    /// The undertime deduction (minutes / 60 x hourly rate, summed per day).
    pub undertime_deduction: Decimal,
}

/// Prices late and undertime minutes over a period's attendance records.
///
/// Each record is checked independently: a missing clock-in contributes no
/// late minutes and a missing clock-out contributes no undertime minutes.
/// Deductions are priced per day and summed, matching how the amounts
/// appear on the deduction ledger.
///
/// # Arguments
///
/// * `records` - The attendance records for the pay period
/// * `hourly_rate` - The hourly rate derived from the monthly salary
///
/// # Returns
///
/// A [`TimeDeductionResult`] with the minute totals and priced deductions.
pub fn calculate_time_deductions(
    records: &[AttendanceRecord],
    hourly_rate: Decimal,
) -> TimeDeductionResult {
    let mut total_late_minutes = 0i64;
    let mut total_undertime_minutes = 0i64;
    let mut late_deduction = Decimal::ZERO;
    let mut undertime_deduction = Decimal::ZERO;

    for record in records {
        if let Some(clock_in) = record.clock_in {
            let minutes = late_minutes(clock_in);
            if minutes > 0 {
                total_late_minutes += minutes;
                late_deduction += minute_pay(minutes, hourly_rate);
            }
        }

        if let Some(clock_out) = record.clock_out {
            let minutes = undertime_minutes(clock_out);
            if minutes > 0 {
                total_undertime_minutes += minutes;
                undertime_deduction += minute_pay(minutes, hourly_rate);
            }
        }
    }

    TimeDeductionResult {
        late_minutes: total_late_minutes,
        undertime_minutes: total_undertime_minutes,
        late_deduction,
        undertime_deduction,
    }
}

/// Prices a minute count at an hourly rate.
///
/// Multiplies before dividing so exact rates stay exact: 20 minutes at
/// 120.00 prices to 40.00, not 39.99 recurring.
fn minute_pay(minutes: i64, hourly_rate: Decimal) -> Decimal {
    Decimal::new(minutes, 0) * hourly_rate / MINUTES_PER_HOUR
}
