//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for determining pay,
//! including rate derivation from monthly salary, attendance-based gross
//! earnings, late and undertime deductions, approved overtime pay, unpaid
//! leave deductions, and the four statutory contributions.

mod attendance_pay;
mod contributions;
mod leave_deduction;
mod overtime_pay;
mod rates;
mod time_deductions;

pub use rates::{
    PayRates, WORKING_DAYS_PER_MONTH, WORKING_HOURS_PER_DAY, daily_rate, derive_rates, hourly_rate,
};
pub use attendance_pay::{AttendancePayResult, calculate_attendance_pay};
pub use time_deductions::{
    MINUTES_PER_HOUR, TimeDeductionResult, calculate_time_deductions, grace_period_end,
    late_minutes, standard_clock_in, standard_clock_out, undertime_minutes,
};
pub use overtime_pay::{OvertimePayResult, calculate_overtime_pay, overtime_multiplier};
pub use leave_deduction::{LeaveDeductionResult, calculate_leave_deduction};
pub use contributions::{
    MONTHS_PER_YEAR, StatutoryContributions, calculate_contributions,
    health_insurance_contribution, housing_fund_contribution, monthly_income_tax,
    social_insurance_contribution,
};
