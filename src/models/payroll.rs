//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture all outputs from a payroll calculation: derived
//! rates, earnings, every deduction component, totals, and warnings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// A warning generated during calculation.
///
/// Warnings record degraded conditions that don't prevent calculation,
/// such as an optional data source being offline or a net pay below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl CalculationWarning {
    /// Creates a warning from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The complete result of a payroll calculation.
///
/// This struct captures every component of the calculation so a reviewer
/// can reproduce the totals by hand: the derived rates, the attendance
/// earnings, overtime, fixed allowances, the four statutory contributions,
/// the three time/leave deductions, and the final totals. The identity
/// `net_pay == gross_pay - total_deductions` always holds exactly.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollResult, PayPeriod};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayrollResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: 10001,
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     },
///     basic_salary: Decimal::ZERO,
///     daily_rate: Decimal::ZERO,
///     hourly_rate: Decimal::ZERO,
///     days_worked: 0,
///     gross_earnings: Decimal::ZERO,
///     overtime_hours: Decimal::ZERO,
///     overtime_pay: Decimal::ZERO,
///     rice_subsidy: Decimal::ZERO,
///     phone_allowance: Decimal::ZERO,
///     clothing_allowance: Decimal::ZERO,
///     late_deduction: Decimal::ZERO,
///     undertime_deduction: Decimal::ZERO,
///     unpaid_leave_days: 0,
///     unpaid_leave_deduction: Decimal::ZERO,
///     social_insurance: Decimal::ZERO,
///     health_insurance: Decimal::ZERO,
///     housing_fund: Decimal::ZERO,
///     income_tax: Decimal::ZERO,
///     gross_pay: Decimal::ZERO,
///     total_deductions: Decimal::ZERO,
///     net_pay: Decimal::ZERO,
///     warnings: vec![],
/// };
/// assert_eq!(result.net_pay, result.gross_pay - result.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the calculation is for.
    pub employee_id: u32,
    /// The pay period for this calculation.
    pub pay_period: PayPeriod,
    /// The monthly basic salary the rates derive from.
    pub basic_salary: Decimal,
    /// The derived daily rate (salary / working days per month).
    pub daily_rate: Decimal,
    /// The derived hourly rate (daily rate / working hours per day).
    pub hourly_rate: Decimal,
    /// The number of valid attendance days in the period.
    pub days_worked: u32,
    /// Attendance earnings (days worked x daily rate).
    pub gross_earnings: Decimal,
    /// Total approved overtime hours in the period.
    pub overtime_hours: Decimal,
    /// Overtime pay at the premium rate.
    pub overtime_pay: Decimal,
    /// Fixed monthly rice subsidy from the employee profile.
    pub rice_subsidy: Decimal,
    /// Fixed monthly phone allowance from the employee profile.
    pub phone_allowance: Decimal,
    /// Fixed monthly clothing allowance from the employee profile.
    pub clothing_allowance: Decimal,
    /// Deduction for minutes arrived after the grace threshold.
    pub late_deduction: Decimal,
    /// Deduction for minutes left before the standard clock-out.
    pub undertime_deduction: Decimal,
    /// Approved unpaid leave days in the period.
    pub unpaid_leave_days: u32,
    /// Deduction for unpaid leave days.
    pub unpaid_leave_deduction: Decimal,
    /// Social insurance contribution from the bracket table.
    pub social_insurance: Decimal,
    /// Health insurance contribution (clamped half-premium).
    pub health_insurance: Decimal,
    /// Housing fund contribution.
    pub housing_fund: Decimal,
    /// Monthly withholding income tax.
    pub income_tax: Decimal,
    /// Gross pay: earnings + overtime + allowances.
    pub gross_pay: Decimal,
    /// Sum of the four contributions and three time/leave deductions.
    pub total_deductions: Decimal,
    /// Net pay: gross pay minus total deductions.
    pub net_pay: Decimal,
    /// Any warnings generated during calculation.
    pub warnings: Vec<CalculationWarning>,
}

impl PayrollResult {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
