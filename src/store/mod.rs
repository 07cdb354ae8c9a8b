//! Data source abstractions for the payroll engine.
//!
//! The engine reads employees, attendance, overtime, and leave from
//! external collaborators and writes deduction line items back to one.
//! Each collaborator is a trait here so calculations stay independent of
//! where the records actually live. [`MemoryStore`] backs tests and
//! benchmarks; [`UnavailableStore`] stands in for a source that is down.

use thiserror::Error;

use crate::models::{AttendanceRecord, DeductionRecord, Employee, LeaveRecord, OvertimeRecord, PayPeriod};

mod memory;
mod unavailable;

pub use memory::MemoryStore;
pub use unavailable::UnavailableStore;

/// Errors a data source can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing data source could not be reached.
    #[error("Data source unreachable: {message}")]
    Unreachable {
        /// What went wrong while connecting.
        message: String,
    },

    /// The backing data source rejected the operation.
    #[error("Store operation failed: {message}")]
    OperationFailed {
        /// What the source reported.
        message: String,
    },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to employee master data.
pub trait EmployeeStore: Send + Sync {
    /// Looks up a single employee. `Ok(None)` means the id is unknown,
    /// which is distinct from the source being unreachable.
    fn employee_by_id(&self, employee_id: u32) -> StoreResult<Option<Employee>>;

    /// Returns every employee on the roster.
    fn all_employees(&self) -> StoreResult<Vec<Employee>>;
}

/// Read access to daily attendance records.
pub trait AttendanceStore: Send + Sync {
    /// Returns the employee's attendance records dated within the period.
    fn attendance_for_period(
        &self,
        employee_id: u32,
        period: &PayPeriod,
    ) -> StoreResult<Vec<AttendanceRecord>>;
}

/// Read access to overtime requests.
pub trait OvertimeStore: Send + Sync {
    /// Returns the employee's overtime requests overlapping the period,
    /// regardless of approval state.
    fn overtime_for_period(
        &self,
        employee_id: u32,
        period: &PayPeriod,
    ) -> StoreResult<Vec<OvertimeRecord>>;
}

/// Read access to leave requests.
pub trait LeaveStore: Send + Sync {
    /// Returns the employee's leave requests overlapping the period,
    /// regardless of approval state.
    fn leave_for_period(
        &self,
        employee_id: u32,
        period: &PayPeriod,
    ) -> StoreResult<Vec<LeaveRecord>>;
}

/// Write access for deduction line items.
pub trait DeductionStore: Send + Sync {
    /// Persists one deduction line item.
    fn save_deduction(&self, record: &DeductionRecord) -> StoreResult<()>;
}
