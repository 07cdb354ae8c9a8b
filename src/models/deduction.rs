//! Deduction line-item model.
//!
//! This module defines the records handed to the deduction sink after a
//! calculation, one per non-zero time or leave deduction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// The kind of deduction a line item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// Minutes charged for arriving after the grace threshold.
    Late,
    /// Minutes charged for leaving before the standard clock-out.
    Undertime,
    /// Approved unpaid leave days.
    UnpaidLeave,
}

impl DeductionType {
    /// Returns the label used in persisted descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            DeductionType::Late => "Late",
            DeductionType::Undertime => "Undertime",
            DeductionType::UnpaidLeave => "UnpaidLeave",
        }
    }
}

/// A single deduction line item to be persisted for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRecord {
    /// The employee the deduction applies to.
    pub employee_id: u32,
    /// The kind of deduction.
    pub deduction_type: DeductionType,
    /// The deducted amount.
    pub amount: Decimal,
    /// A human-readable description including the pay period.
    pub description: String,
    /// The effective date of the deduction (the period end).
    pub deduction_date: NaiveDate,
}

impl DeductionRecord {
    /// Builds a line item for the given period.
    ///
    /// The description follows the ledger convention
    /// `"<Type> deduction for period <start> to <end>"` and the deduction
    /// is dated on the period end.
    pub fn new(
        employee_id: u32,
        deduction_type: DeductionType,
        amount: Decimal,
        period: &PayPeriod,
    ) -> Self {
        let description = format!(
            "{} deduction for period {} to {}",
            deduction_type.label(),
            period.start_date,
            period.end_date
        );
        Self {
            employee_id,
            deduction_type,
            amount,
            description,
            deduction_date: period.end_date,
        }
    }
}
