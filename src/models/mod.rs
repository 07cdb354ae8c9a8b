//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod deduction;
mod employee;
mod leave;
mod overtime;
mod pay_period;
mod payroll;

pub use attendance::AttendanceRecord;
pub use deduction::{DeductionRecord, DeductionType};
pub use employee::{Employee, EmploymentStatus};
pub use leave::{LeaveRecord, LeaveStatus};
pub use overtime::OvertimeRecord;
pub use pay_period::PayPeriod;
pub use payroll::{CalculationWarning, PayrollResult};
