//! The weekly payroll report.

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::calculation::compute_breakdown;
use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{PayWindow, PayrollRow, PayrollTotals, WeeklyPayrollReport};
use crate::store::{AttendanceStore, EmployeeStore};

use super::ENGINE_VERSION;

/// Builds the payroll report for the week containing `week_of`.
///
/// Employees without any attendance dated in the week get no row. Totals
/// are the sums of the rounded rows, so they match what is displayed.
pub fn weekly_payroll_report<S>(
    store: &S,
    policy: &PolicyConfig,
    week_of: NaiveDate,
) -> EngineResult<WeeklyPayrollReport>
where
    S: EmployeeStore + AttendanceStore + ?Sized,
{
    let window = PayWindow::week_containing(week_of, policy.week_start);
    let pay_policy = policy.pay_policy();

    let mut rows = Vec::new();
    let mut totals = PayrollTotals::default();

    for employee in store.employees()? {
        let records = store.records_for(&employee.id, &window)?;
        let breakdown = compute_breakdown(&pay_policy, employee.hourly_rate, &records, &window);
        if breakdown.summary.is_empty() {
            continue;
        }

        let summary = breakdown.summary.rounded(policy.currency_decimal_places);
        totals.add(&summary);
        rows.push(PayrollRow {
            employee_id: employee.id,
            employee_name: employee.name,
            hourly_rate: employee.hourly_rate,
            summary,
        });
    }

    debug!(
        start = %window.start_date,
        end = %window.end_date,
        rows = rows.len(),
        "Built weekly payroll report"
    );

    Ok(WeeklyPayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        window,
        rows,
        totals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, AttendanceStatus, Employee};
    use crate::store::InMemoryStore;
    use chrono::{NaiveDateTime, Weekday};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_employee(id: &str, rate: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            position: None,
            hourly_rate: dec(rate),
        }
    }

    fn create_record(id: &str, employee_id: &str, date: &str, end: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            date: make_date(date),
            time_in: Some(make_datetime(date, "09:00:00")),
            time_out: Some(make_datetime(date, end)),
            break_start: None,
            break_end: None,
            status: AttendanceStatus::Present,
        }
    }

    fn create_store() -> InMemoryStore {
        InMemoryStore::new(
            vec![
                create_employee("emp_001", "20.00"),
                create_employee("emp_002", "15.00"),
                create_employee("emp_003", "30.00"),
            ],
            vec![
                create_record("att_1", "emp_001", "2026-01-12", "17:00:00"),
                create_record("att_2", "emp_001", "2026-01-13", "13:00:00"),
                create_record("att_3", "emp_002", "2026-01-14", "09:20:00"),
                // Previous week
                create_record("att_4", "emp_003", "2026-01-09", "17:00:00"),
            ],
        )
    }

    #[test]
    fn test_report_rows_and_totals() {
        let report =
            weekly_payroll_report(&create_store(), &PolicyConfig::default(), make_date("2026-01-14"))
                .unwrap();

        assert_eq!(report.window.start_date, make_date("2026-01-12"));
        assert_eq!(report.window.end_date, make_date("2026-01-18"));

        let ids: Vec<&str> = report.rows.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["emp_001", "emp_002"]);

        assert_eq!(report.rows[0].summary.total_hours, dec("12"));
        assert_eq!(report.rows[0].summary.gross_pay, dec("240.00"));
        // 20 minutes at 15.00
        assert_eq!(report.rows[1].summary.total_hours, dec("0.33"));
        assert_eq!(report.rows[1].summary.gross_pay, dec("5.00"));

        assert_eq!(report.totals.employee_count, 2);
        assert_eq!(report.totals.gross_pay, dec("245.00"));
        assert_eq!(report.totals.net_pay, dec("245.00"));
        assert_eq!(report.totals.total_hours, dec("12.33"));
    }

    #[test]
    fn test_report_for_empty_week() {
        let report =
            weekly_payroll_report(&create_store(), &PolicyConfig::default(), make_date("2026-02-02"))
                .unwrap();

        assert!(report.rows.is_empty());
        assert_eq!(report.totals, PayrollTotals::default());
    }

    #[test]
    fn test_report_respects_week_start() {
        let policy = PolicyConfig {
            week_start: Weekday::Sat,
            ..PolicyConfig::default()
        };
        // Week Sat 2026-01-03 .. Fri 2026-01-09 picks up only the previous-week record
        let report = weekly_payroll_report(&create_store(), &policy, make_date("2026-01-09")).unwrap();

        assert_eq!(report.window.start_date, make_date("2026-01-03"));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].employee_id, "emp_003");
        assert_eq!(report.rows[0].summary.gross_pay, dec("240.00"));
    }
}
