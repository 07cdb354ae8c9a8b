//! Attendance record model.
//!
//! This module defines the AttendanceRecord struct representing one day of
//! clock-in/clock-out data in the payroll calculation system.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one day of attendance for an employee.
///
/// Either timestamp may be missing: a biometric terminal outage or a
/// forgotten punch-out leaves a partial record rather than no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: u32,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The clock-in time, if one was captured.
    pub clock_in: Option<NaiveTime>,
    /// The clock-out time, if one was captured.
    pub clock_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Returns true if this record counts as a worked day.
    ///
    /// A day is valid when the clock-in is present. A missing clock-out
    /// does not invalidate the day; it only suppresses undertime checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: 10001,
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ///     clock_in: NaiveTime::from_hms_opt(8, 0, 0),
    ///     clock_out: None,
    /// };
    /// assert!(record.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.clock_in.is_some()
    }

    /// Calculates the hours between clock-in and clock-out.
    ///
    /// Returns zero when either timestamp is missing or the span is
    /// negative (a corrupt record with clock-out before clock-in).
    ///
    /// # Returns
    ///
    /// The worked span in hours as a Decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: 10001,
    ///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
    ///     clock_in: NaiveTime::from_hms_opt(8, 0, 0),
    ///     clock_out: NaiveTime::from_hms_opt(17, 0, 0),
    /// };
    /// assert_eq!(record.work_hours(), Decimal::new(90, 1)); // 9.0 hours
    /// ```
    pub fn work_hours(&self) -> Decimal {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) => {
                let minutes = (clock_out - clock_in).num_minutes();
                if minutes <= 0 {
                    Decimal::ZERO
                } else {
                    // Convert minutes to hours as Decimal
                    Decimal::new(minutes, 0) / Decimal::new(60, 0)
                }
            }
            _ => Decimal::ZERO,
        }
    }
}
