//! A stand-in for a data source that is down.

use crate::models::{AttendanceRecord, DeductionRecord, Employee, LeaveRecord, OvertimeRecord, PayPeriod};

use super::{
    AttendanceStore, DeductionStore, EmployeeStore, LeaveStore, OvertimeStore, StoreError,
    StoreResult,
};

/// A store whose every operation fails with [`StoreError::Unreachable`].
///
/// Wiring this in for an optional source (overtime, leave, the deduction
/// sink) exercises the engine's degraded paths; wiring it in for a
/// required source exercises the fatal ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StoreError {
        StoreError::Unreachable {
            message: "source offline".to_string(),
        }
    }
}

impl EmployeeStore for UnavailableStore {
    fn employee_by_id(&self, _employee_id: u32) -> StoreResult<Option<Employee>> {
        Err(Self::error())
    }

    fn all_employees(&self) -> StoreResult<Vec<Employee>> {
        Err(Self::error())
    }
}

impl AttendanceStore for UnavailableStore {
    fn attendance_for_period(
        &self,
        _employee_id: u32,
        _period: &PayPeriod,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        Err(Self::error())
    }
}

impl OvertimeStore for UnavailableStore {
    fn overtime_for_period(
        &self,
        _employee_id: u32,
        _period: &PayPeriod,
    ) -> StoreResult<Vec<OvertimeRecord>> {
        Err(Self::error())
    }
}

impl LeaveStore for UnavailableStore {
    fn leave_for_period(
        &self,
        _employee_id: u32,
        _period: &PayPeriod,
    ) -> StoreResult<Vec<LeaveRecord>> {
        Err(Self::error())
    }
}

impl DeductionStore for UnavailableStore {
    fn save_deduction(&self, _record: &DeductionRecord) -> StoreResult<()> {
        Err(Self::error())
    }
}
