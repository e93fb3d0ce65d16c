//! Payslip builders for the employee detail page and the portal.

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::calculation::compute_breakdown;
use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{PayWindow, Payslip};
use crate::store::{AttendanceStore, EmployeeStore};

use super::ENGINE_VERSION;

/// Builds a payslip for any employee. Without a window the payslip covers
/// all of the employee's attendance.
pub fn employee_payslip<S>(
    store: &S,
    policy: &PolicyConfig,
    employee_id: &str,
    window: Option<PayWindow>,
) -> EngineResult<Payslip>
where
    S: EmployeeStore + AttendanceStore + ?Sized,
{
    build_payslip(store, policy, employee_id, window.unwrap_or_else(PayWindow::all_time))
}

/// Builds the self-service payslip for the signed-in employee. Without a
/// window the payslip covers the payroll week containing `as_of`.
pub fn portal_payslip<S>(
    store: &S,
    policy: &PolicyConfig,
    employee_id: &str,
    window: Option<PayWindow>,
    as_of: NaiveDate,
) -> EngineResult<Payslip>
where
    S: EmployeeStore + AttendanceStore + ?Sized,
{
    let window =
        window.unwrap_or_else(|| PayWindow::week_containing(as_of, policy.week_start));
    build_payslip(store, policy, employee_id, window)
}

fn build_payslip<S>(
    store: &S,
    policy: &PolicyConfig,
    employee_id: &str,
    window: PayWindow,
) -> EngineResult<Payslip>
where
    S: EmployeeStore + AttendanceStore + ?Sized,
{
    let employee = store.employee(employee_id)?;
    let records = store.records_for(employee_id, &window)?;
    let breakdown = compute_breakdown(&policy.pay_policy(), employee.hourly_rate, &records, &window);

    debug!(
        employee_id,
        start = %window.start_date,
        end = %window.end_date,
        records = breakdown.summary.record_count,
        "Built payslip"
    );

    Ok(Payslip {
        payslip_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee,
        window,
        lines: breakdown.lines,
        summary: breakdown.summary.rounded(policy.currency_decimal_places),
    })
}
