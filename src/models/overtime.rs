//! Overtime request model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Represents a single overtime request filed by an employee.
///
/// Only approved requests are payable. The date range covers the days the
/// extra hours were worked; a request overlapping the pay period counts in
/// full, matching how requests are filed per cut-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// The employee who filed the request.
    pub employee_id: u32,
    /// The first day the overtime covers.
    pub start_date: NaiveDate,
    /// The last day the overtime covers.
    pub end_date: NaiveDate,
    /// The requested overtime hours.
    pub hours: Decimal,
    /// Whether a supervisor approved the request.
    pub approved: bool,
}

impl OvertimeRecord {
    /// Returns true if the request's date range intersects the pay period.
    pub fn overlaps(&self, period: &PayPeriod) -> bool {
        self.start_date <= period.end_date && self.end_date >= period.start_date
    }
}
