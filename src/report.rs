//! Roster-level aggregation of payroll results.
//!
//! A [`PayrollRun`] captures one pass over the whole roster: the results
//! that succeeded, the employees that failed, and summary totals for the
//! period. [`summarize_attendance`] condenses raw attendance records into
//! the headcount statistics an HR report needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::late_minutes;
use crate::error::EngineError;
use crate::models::{AttendanceRecord, PayPeriod, PayrollResult};

/// One employee the roster run could not calculate.
#[derive(Debug)]
pub struct RosterFailure {
    /// The employee whose calculation failed.
    pub employee_id: u32,
    /// Why it failed.
    pub error: EngineError,
}

/// The outcome of calculating payroll for an entire roster.
///
/// Failures are collected alongside results so one bad employee record
/// never hides the rest of the run.
#[derive(Debug)]
pub struct PayrollRun {
    /// The pay period the run covers.
    pub pay_period: PayPeriod,
    /// The successful calculations.
    pub results: Vec<PayrollResult>,
    /// The employees that could not be calculated.
    pub failures: Vec<RosterFailure>,
}

impl PayrollRun {
    /// Returns the summary totals over the successful results.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            employee_count: self.results.len() as u32,
            total_gross_pay: self.results.iter().map(|r| r.gross_pay).sum(),
            total_deductions: self.results.iter().map(|r| r.total_deductions).sum(),
            total_net_pay: self.results.iter().map(|r| r.net_pay).sum(),
            total_social_insurance: self.results.iter().map(|r| r.social_insurance).sum(),
            total_health_insurance: self.results.iter().map(|r| r.health_insurance).sum(),
            total_housing_fund: self.results.iter().map(|r| r.housing_fund).sum(),
            total_income_tax: self.results.iter().map(|r| r.income_tax).sum(),
        }
    }
}

/// Summary totals for a payroll run, covering successful results only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// How many employees were successfully calculated.
    pub employee_count: u32,
    /// Sum of gross pay across the run.
    pub total_gross_pay: Decimal,
    /// Sum of total deductions across the run.
    pub total_deductions: Decimal,
    /// Sum of net pay across the run.
    pub total_net_pay: Decimal,
    /// Sum of social insurance contributions.
    pub total_social_insurance: Decimal,
    /// Sum of health insurance contributions.
    pub total_health_insurance: Decimal,
    /// Sum of housing fund contributions.
    pub total_housing_fund: Decimal,
    /// Sum of withheld income tax.
    pub total_income_tax: Decimal,
}

/// Headcount attendance statistics for a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// The number of employees the report covers.
    pub total_employees: u32,
    /// Recorded attendance days. A recorded day counts as present even
    /// when its clock-in is missing; payable days are counted separately
    /// by the payroll calculation.
    pub total_present_days: u32,
    /// Days where the clock-in fell past the grace threshold.
    pub total_late_days: u32,
    /// Scheduled weekday slots minus present days. Negative when
    /// employees recorded more days than the period's weekdays, e.g.
    /// weekend work.
    pub total_absent_days: i64,
    /// Sum of worked hours over all records.
    pub total_work_hours: Decimal,
    /// Worked hours averaged over present days.
    pub average_work_hours: Decimal,
    /// Present days as a percentage of scheduled weekday slots.
    pub attendance_rate: Decimal,
}

/// Condenses attendance records into an [`AttendanceSummary`].
///
/// `employee_count` is the number of employees the report covers,
/// including those with no records at all; it anchors the absent-day and
/// attendance-rate figures.
pub fn summarize_attendance(
    records: &[AttendanceRecord],
    employee_count: u32,
    period: &PayPeriod,
) -> AttendanceSummary {
    let total_present_days = records.len() as u32;
    let total_late_days = records
        .iter()
        .filter(|record| record.clock_in.is_some_and(|clock_in| late_minutes(clock_in) > 0))
        .count() as u32;
    let total_work_hours: Decimal = records.iter().map(|record| record.work_hours()).sum();

    let scheduled_days = i64::from(employee_count) * i64::from(period.working_days());
    let total_absent_days = scheduled_days - i64::from(total_present_days);

    let average_work_hours = if total_present_days > 0 {
        total_work_hours / Decimal::from(total_present_days)
    } else {
        Decimal::ZERO
    };
    let attendance_rate = if scheduled_days > 0 {
        Decimal::from(total_present_days) / Decimal::from(scheduled_days) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    AttendanceSummary {
        total_employees: employee_count,
        total_present_days,
        total_late_days,
        total_absent_days,
        total_work_hours,
        average_work_hours,
        attendance_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn june() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2024-06-01"),
            end_date: make_date("2024-06-30"),
        }
    }

    fn sample_result(employee_id: u32, gross: &str, deductions: &str) -> PayrollResult {
        let gross_pay = dec(gross);
        let total_deductions = dec(deductions);
        PayrollResult {
            calculation_id: Uuid::nil(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            employee_id,
            pay_period: june(),
            basic_salary: dec("20000.00"),
            daily_rate: dec("909.09"),
            hourly_rate: dec("113.64"),
            days_worked: 20,
            gross_earnings: gross_pay,
            overtime_hours: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            rice_subsidy: Decimal::ZERO,
            phone_allowance: Decimal::ZERO,
            clothing_allowance: Decimal::ZERO,
            late_deduction: Decimal::ZERO,
            undertime_deduction: Decimal::ZERO,
            unpaid_leave_days: 0,
            unpaid_leave_deduction: Decimal::ZERO,
            social_insurance: dec("720.00"),
            health_insurance: dec("500.00"),
            housing_fund: dec("200.00"),
            income_tax: Decimal::ZERO,
            gross_pay,
            total_deductions,
            net_pay: gross_pay - total_deductions,
            warnings: vec![],
        }
    }

    fn record(employee_id: u32, date_str: &str, clock_in: Option<&str>, clock_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id,
            date: make_date(date_str),
            clock_in: clock_in.map(make_time),
            clock_out: clock_out.map(make_time),
        }
    }

    /// RS-001: run totals are the component sums over successes.
    #[test]
    fn test_run_summary_totals() {
        let run = PayrollRun {
            pay_period: june(),
            results: vec![
                sample_result(10001, "20000.00", "1500.00"),
                sample_result(10002, "30000.00", "2500.00"),
            ],
            failures: vec![],
        };

        let summary = run.summary();
        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.total_gross_pay, dec("50000.00"));
        assert_eq!(summary.total_deductions, dec("4000.00"));
        assert_eq!(summary.total_net_pay, dec("46000.00"));
        assert_eq!(summary.total_social_insurance, dec("1440.00"));
        assert_eq!(summary.total_health_insurance, dec("1000.00"));
        assert_eq!(summary.total_housing_fund, dec("400.00"));
        assert_eq!(summary.total_income_tax, Decimal::ZERO);
    }

    /// RS-002: an empty run sums to zero everywhere.
    #[test]
    fn test_empty_run_summary() {
        let run = PayrollRun {
            pay_period: june(),
            results: vec![],
            failures: vec![],
        };

        let summary = run.summary();
        assert_eq!(summary.employee_count, 0);
        assert_eq!(summary.total_gross_pay, Decimal::ZERO);
        assert_eq!(summary.total_net_pay, Decimal::ZERO);
    }

    /// AS-001: present, late, and absent days over a two-person roster.
    #[test]
    fn test_attendance_summary_counts() {
        // June 2024 has 20 weekdays, so 2 employees have 40 scheduled slots.
        let records = vec![
            record(10001, "2024-06-03", Some("08:00:00"), Some("17:00:00")),
            record(10001, "2024-06-04", Some("08:30:00"), Some("17:00:00")),
            record(10002, "2024-06-03", Some("08:10:00"), Some("16:00:00")),
        ];

        let summary = summarize_attendance(&records, 2, &june());

        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_present_days, 3);
        // Only the 08:30 arrival is past the 08:15 grace threshold.
        assert_eq!(summary.total_late_days, 1);
        assert_eq!(summary.total_absent_days, 37);
        // 9 + 8.5 + 7.833... hours.
        assert_eq!(summary.total_work_hours.round_dp(2), dec("25.33"));
        assert_eq!(summary.average_work_hours.round_dp(2), dec("8.44"));
        // 3 of 40 slots.
        assert_eq!(summary.attendance_rate, dec("7.5"));
    }

    /// AS-002: records without a clock-in count present but never late.
    #[test]
    fn test_attendance_summary_missing_clock_in() {
        let records = vec![record(10001, "2024-06-03", None, Some("17:00:00"))];

        let summary = summarize_attendance(&records, 1, &june());

        assert_eq!(summary.total_present_days, 1);
        assert_eq!(summary.total_late_days, 0);
        assert_eq!(summary.total_work_hours, Decimal::ZERO);
    }

    /// AS-003: weekend-only periods have no scheduled slots.
    #[test]
    fn test_attendance_summary_weekend_only_period() {
        let weekend = PayPeriod {
            start_date: make_date("2024-06-01"),
            end_date: make_date("2024-06-02"),
        };
        let records = vec![record(10001, "2024-06-01", Some("08:00:00"), Some("12:00:00"))];

        let summary = summarize_attendance(&records, 1, &weekend);

        // Weekend work drives the absent count negative.
        assert_eq!(summary.total_absent_days, -1);
        assert_eq!(summary.attendance_rate, Decimal::ZERO);
    }

    /// AS-004: no records and no employees stay at zero without dividing.
    #[test]
    fn test_attendance_summary_empty() {
        let summary = summarize_attendance(&[], 0, &june());

        assert_eq!(summary.total_present_days, 0);
        assert_eq!(summary.total_absent_days, 0);
        assert_eq!(summary.average_work_hours, Decimal::ZERO);
        assert_eq!(summary.attendance_rate, Decimal::ZERO);
    }
}
