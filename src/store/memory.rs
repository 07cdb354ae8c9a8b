//! In-memory data source for tests and benchmarks.

use std::sync::Mutex;

use crate::models::{AttendanceRecord, DeductionRecord, Employee, LeaveRecord, OvertimeRecord, PayPeriod};

use super::{
    AttendanceStore, DeductionStore, EmployeeStore, LeaveStore, OvertimeStore, StoreError,
    StoreResult,
};

/// An in-memory implementation of every store trait.
///
/// Records are seeded through the `with_*` builder methods and filtered
/// per query the same way a database-backed source would filter by id
/// and date range. Saved deductions are kept for inspection.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use payroll_engine::store::{EmployeeStore, MemoryStore};
/// use rust_decimal::Decimal;
///
/// let store = MemoryStore::new().with_employee(Employee {
///     employee_id: 10001,
///     first_name: "Maria".to_string(),
///     last_name: "Santos".to_string(),
///     status: payroll_engine::models::EmploymentStatus::Regular,
///     basic_salary: Decimal::new(2000000, 2),
///     rice_subsidy: Decimal::ZERO,
///     phone_allowance: Decimal::ZERO,
///     clothing_allowance: Decimal::ZERO,
/// });
///
/// let found = store.employee_by_id(10001).unwrap();
/// assert!(found.is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    overtime: Vec<OvertimeRecord>,
    leave: Vec<LeaveRecord>,
    saved_deductions: Mutex<Vec<DeductionRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the roster.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds one attendance record.
    pub fn with_attendance(mut self, record: AttendanceRecord) -> Self {
        self.attendance.push(record);
        self
    }

    /// Adds several attendance records at once.
    pub fn with_attendance_records(mut self, records: Vec<AttendanceRecord>) -> Self {
        self.attendance.extend(records);
        self
    }

    /// Adds one overtime request.
    pub fn with_overtime(mut self, record: OvertimeRecord) -> Self {
        self.overtime.push(record);
        self
    }

    /// Adds one leave request.
    pub fn with_leave(mut self, record: LeaveRecord) -> Self {
        self.leave.push(record);
        self
    }

    /// Returns a snapshot of every deduction saved so far.
    pub fn saved_deductions(&self) -> Vec<DeductionRecord> {
        self.saved_deductions
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

impl EmployeeStore for MemoryStore {
    fn employee_by_id(&self, employee_id: u32) -> StoreResult<Option<Employee>> {
        Ok(self
            .employees
            .iter()
            .find(|employee| employee.employee_id == employee_id)
            .cloned())
    }

    fn all_employees(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}

impl AttendanceStore for MemoryStore {
    fn attendance_for_period(
        &self,
        employee_id: u32,
        period: &PayPeriod,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        Ok(self
            .attendance
            .iter()
            .filter(|record| record.employee_id == employee_id && period.contains_date(record.date))
            .cloned()
            .collect())
    }
}

impl OvertimeStore for MemoryStore {
    fn overtime_for_period(
        &self,
        employee_id: u32,
        period: &PayPeriod,
    ) -> StoreResult<Vec<OvertimeRecord>> {
        Ok(self
            .overtime
            .iter()
            .filter(|record| record.employee_id == employee_id && record.overlaps(period))
            .cloned()
            .collect())
    }
}

impl LeaveStore for MemoryStore {
    fn leave_for_period(
        &self,
        employee_id: u32,
        period: &PayPeriod,
    ) -> StoreResult<Vec<LeaveRecord>> {
        Ok(self
            .leave
            .iter()
            .filter(|record| record.employee_id == employee_id && record.overlaps(period))
            .cloned()
            .collect())
    }
}

impl DeductionStore for MemoryStore {
    fn save_deduction(&self, record: &DeductionRecord) -> StoreResult<()> {
        let mut saved = self
            .saved_deductions
            .lock()
            .map_err(|_| StoreError::OperationFailed {
                message: "deduction log lock poisoned".to_string(),
            })?;
        saved.push(record.clone());
        Ok(())
    }
}
