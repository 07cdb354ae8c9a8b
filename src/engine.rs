//! Payroll calculation orchestration.
//!
//! [`PayrollEngine`] wires the calculation functions to the data source
//! traits and runs the full sequence for one employee and pay period:
//! input validation, employee lookup, rate derivation, attendance
//! earnings, overtime, time and leave deductions, statutory
//! contributions, and final totals with their invariant checks.
//!
//! Attendance is a required source; overtime, leave, and the deduction
//! sink degrade gracefully when unavailable.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    LeaveDeductionResult, OvertimePayResult, TimeDeductionResult, calculate_attendance_pay,
    calculate_contributions, calculate_leave_deduction, calculate_overtime_pay,
    calculate_time_deductions, derive_rates,
};
use crate::config::ContributionSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationWarning, DeductionRecord, DeductionType, PayPeriod, PayrollResult,
};
use crate::report::{PayrollRun, RosterFailure};
use crate::store::{AttendanceStore, DeductionStore, EmployeeStore, LeaveStore, OvertimeStore};

/// Orchestrates payroll calculations against a set of data sources.
///
/// The engine holds no per-calculation state, so a single instance can
/// serve concurrent calculations from multiple threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::{NaiveDate, NaiveTime};
/// use payroll_engine::engine::PayrollEngine;
/// use payroll_engine::models::{AttendanceRecord, Employee, EmploymentStatus, PayPeriod};
/// use payroll_engine::store::MemoryStore;
/// use rust_decimal::Decimal;
///
/// let store = Arc::new(
///     MemoryStore::new()
///         .with_employee(Employee {
///             employee_id: 10001,
///             first_name: "Maria".to_string(),
///             last_name: "Santos".to_string(),
///             status: EmploymentStatus::Regular,
///             basic_salary: Decimal::new(2000000, 2),
///             rice_subsidy: Decimal::ZERO,
///             phone_allowance: Decimal::ZERO,
///             clothing_allowance: Decimal::ZERO,
///         })
///         .with_attendance(AttendanceRecord {
///             employee_id: 10001,
///             date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///             clock_in: NaiveTime::from_hms_opt(8, 0, 0),
///             clock_out: NaiveTime::from_hms_opt(17, 0, 0),
///         }),
/// );
///
/// let engine = PayrollEngine::new(
///     store.clone(),
///     store.clone(),
///     store.clone(),
///     store.clone(),
///     store.clone(),
/// );
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// };
/// let result = engine.calculate(10001, &period).unwrap();
///
/// assert_eq!(result.days_worked, 1);
/// assert_eq!(result.net_pay, result.gross_pay - result.total_deductions);
/// ```
#[derive(Clone)]
pub struct PayrollEngine {
    schedule: ContributionSchedule,
    employees: Arc<dyn EmployeeStore>,
    attendance: Arc<dyn AttendanceStore>,
    overtime: Arc<dyn OvertimeStore>,
    leave: Arc<dyn LeaveStore>,
    deductions: Arc<dyn DeductionStore>,
}

impl PayrollEngine {
    /// Creates an engine over the given data sources with the statutory
    /// contribution schedule.
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        attendance: Arc<dyn AttendanceStore>,
        overtime: Arc<dyn OvertimeStore>,
        leave: Arc<dyn LeaveStore>,
        deductions: Arc<dyn DeductionStore>,
    ) -> Self {
        Self {
            schedule: ContributionSchedule::default(),
            employees,
            attendance,
            overtime,
            leave,
            deductions,
        }
    }

    /// Replaces the contribution schedule, e.g. with one loaded from YAML.
    pub fn with_schedule(mut self, schedule: ContributionSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Calculates payroll for one employee over one pay period.
    ///
    /// Inputs are validated before any data access. The attendance source
    /// is required; overtime and leave fall back to zero with a recorded
    /// warning when their sources fail, and deduction persistence failures
    /// are logged without affecting the result.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero employee id, an inverted period, an
    /// unknown employee, a non-positive salary, an unreachable employee or
    /// attendance source, or a negative gross pay or total deductions.
    pub fn calculate(&self, employee_id: u32, period: &PayPeriod) -> EngineResult<PayrollResult> {
        let calculation_id = Uuid::new_v4();
        info!(
            calculation_id = %calculation_id,
            employee_id,
            start_date = %period.start_date,
            end_date = %period.end_date,
            "Starting payroll calculation"
        );

        // Reject bad inputs before touching any data source.
        if employee_id == 0 {
            return Err(EngineError::InvalidEmployeeId { id: employee_id });
        }
        if !period.is_valid() {
            return Err(EngineError::InvalidPayPeriod {
                start_date: period.start_date,
                end_date: period.end_date,
            });
        }

        let employee = self
            .employees
            .employee_by_id(employee_id)
            .map_err(|e| EngineError::SourceUnavailable {
                source: "employee".to_string(),
                message: e.to_string(),
            })?
            .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;

        if employee.basic_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                id: employee_id,
                salary: employee.basic_salary,
            });
        }

        let rates = derive_rates(employee.basic_salary);
        let mut warnings: Vec<CalculationWarning> = Vec::new();

        // Basic pay cannot be approximated, so attendance failures abort.
        let attendance = self
            .attendance
            .attendance_for_period(employee_id, period)
            .map_err(|e| EngineError::SourceUnavailable {
                source: "attendance".to_string(),
                message: e.to_string(),
            })?;

        let attendance_pay = calculate_attendance_pay(&attendance, rates.daily);
        if attendance_pay.days_worked == 0 {
            warn!(employee_id, "No valid attendance days in period");
            warnings.push(CalculationWarning::new(
                "zero_attendance",
                format!(
                    "No valid attendance days between {} and {}",
                    period.start_date, period.end_date
                ),
            ));
        }

        let overtime_pay = match self.overtime.overtime_for_period(employee_id, period) {
            Ok(records) => calculate_overtime_pay(&records, rates.hourly),
            Err(err) => {
                warn!(employee_id, error = %err, "Overtime source unavailable, assuming none");
                warnings.push(CalculationWarning::new(
                    "overtime_unavailable",
                    format!("Overtime source unavailable: {}", err),
                ));
                OvertimePayResult {
                    total_hours: Decimal::ZERO,
                    overtime_pay: Decimal::ZERO,
                }
            }
        };

        // Time deductions reuse the attendance snapshot fetched above.
        let time_deductions = calculate_time_deductions(&attendance, rates.hourly);

        let leave_deduction = match self.leave.leave_for_period(employee_id, period) {
            Ok(records) => calculate_leave_deduction(&records, rates.daily),
            Err(err) => {
                warn!(employee_id, error = %err, "Leave source unavailable, assuming none");
                warnings.push(CalculationWarning::new(
                    "leave_unavailable",
                    format!("Leave source unavailable: {}", err),
                ));
                LeaveDeductionResult {
                    unpaid_days: 0,
                    deduction: Decimal::ZERO,
                }
            }
        };

        self.persist_deductions(employee_id, period, &time_deductions, &leave_deduction);

        let contributions = calculate_contributions(employee.basic_salary, &self.schedule);

        let gross_pay = attendance_pay.gross_earnings
            + overtime_pay.overtime_pay
            + employee.rice_subsidy
            + employee.phone_allowance
            + employee.clothing_allowance;
        let total_deductions = contributions.total()
            + time_deductions.late_deduction
            + time_deductions.undertime_deduction
            + leave_deduction.deduction;
        let net_pay = gross_pay - total_deductions;

        if gross_pay < Decimal::ZERO {
            return Err(EngineError::NegativeGrossPay { amount: gross_pay });
        }
        if total_deductions < Decimal::ZERO {
            return Err(EngineError::NegativeTotalDeductions {
                amount: total_deductions,
            });
        }
        if net_pay < Decimal::ZERO {
            warn!(employee_id, net_pay = %net_pay, "Negative net pay");
            warnings.push(CalculationWarning::new(
                "negative_net_pay",
                format!("Net pay {} is negative", net_pay),
            ));
        }

        info!(
            calculation_id = %calculation_id,
            employee_id,
            days_worked = attendance_pay.days_worked,
            gross_pay = %gross_pay,
            net_pay = %net_pay,
            "Payroll calculation completed"
        );

        Ok(PayrollResult {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id,
            pay_period: *period,
            basic_salary: employee.basic_salary,
            daily_rate: rates.daily,
            hourly_rate: rates.hourly,
            days_worked: attendance_pay.days_worked,
            gross_earnings: attendance_pay.gross_earnings,
            overtime_hours: overtime_pay.total_hours,
            overtime_pay: overtime_pay.overtime_pay,
            rice_subsidy: employee.rice_subsidy,
            phone_allowance: employee.phone_allowance,
            clothing_allowance: employee.clothing_allowance,
            late_deduction: time_deductions.late_deduction,
            undertime_deduction: time_deductions.undertime_deduction,
            unpaid_leave_days: leave_deduction.unpaid_days,
            unpaid_leave_deduction: leave_deduction.deduction,
            social_insurance: contributions.social_insurance,
            health_insurance: contributions.health_insurance,
            housing_fund: contributions.housing_fund,
            income_tax: contributions.income_tax,
            gross_pay,
            total_deductions,
            net_pay,
            warnings,
        })
    }

    /// Calculates payroll for every employee on the roster.
    ///
    /// Employees are processed independently: one failing calculation is
    /// recorded in the run and does not stop the rest. Only an invalid
    /// period or an unreachable employee source fails the whole run.
    pub fn calculate_roster(&self, period: &PayPeriod) -> EngineResult<PayrollRun> {
        if !period.is_valid() {
            return Err(EngineError::InvalidPayPeriod {
                start_date: period.start_date,
                end_date: period.end_date,
            });
        }

        let employees =
            self.employees
                .all_employees()
                .map_err(|e| EngineError::SourceUnavailable {
                    source: "employee".to_string(),
                    message: e.to_string(),
                })?;

        info!(
            employee_count = employees.len(),
            start_date = %period.start_date,
            end_date = %period.end_date,
            "Starting roster calculation"
        );

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for employee in &employees {
            match self.calculate(employee.employee_id, period) {
                Ok(result) => results.push(result),
                Err(error) => {
                    warn!(employee_id = employee.employee_id, error = %error, "Roster entry failed");
                    failures.push(RosterFailure {
                        employee_id: employee.employee_id,
                        error,
                    });
                }
            }
        }

        info!(
            succeeded = results.len(),
            failed = failures.len(),
            "Roster calculation completed"
        );

        Ok(PayrollRun {
            pay_period: *period,
            results,
            failures,
        })
    }

    /// Persists positive deduction line items, logging failures instead
    /// of surfacing them.
    fn persist_deductions(
        &self,
        employee_id: u32,
        period: &PayPeriod,
        time_deductions: &TimeDeductionResult,
        leave_deduction: &LeaveDeductionResult,
    ) {
        let line_items = [
            (DeductionType::Late, time_deductions.late_deduction),
            (DeductionType::Undertime, time_deductions.undertime_deduction),
            (DeductionType::UnpaidLeave, leave_deduction.deduction),
        ];

        for (deduction_type, amount) in line_items {
            if amount <= Decimal::ZERO {
                continue;
            }
            let record = DeductionRecord::new(employee_id, deduction_type, amount, period);
            if let Err(err) = self.deductions.save_deduction(&record) {
                warn!(
                    employee_id,
                    deduction_type = deduction_type.label(),
                    error = %err,
                    "Failed to persist deduction line item"
                );
            }
        }
    }
}
