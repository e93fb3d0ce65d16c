//! Report models rendered by the presentation surfaces.
//!
//! [`Payslip`] backs both the employee detail page and the portal
//! self-service page; [`WeeklyPayrollReport`] backs the admin payroll report.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Employee, PayWindow, PayrollSummary, RecordPay};

/// A payslip for one employee over one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this payslip.
    pub payslip_id: Uuid,
    /// When the payslip was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the figures.
    pub engine_version: String,
    /// The employee the payslip is for.
    pub employee: Employee,
    /// The window the figures cover.
    pub window: PayWindow,
    /// Per-record lines, ordered by date.
    pub lines: Vec<RecordPay>,
    /// Display-rounded totals.
    pub summary: PayrollSummary,
}

/// One employee's row in the weekly payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// The employee's id.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The rate the row was computed at.
    pub hourly_rate: Decimal,
    /// Display-rounded totals for the week.
    pub summary: PayrollSummary,
}

/// Column totals across every row of a payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of row hours.
    pub total_hours: Decimal,
    /// Sum of row deductions.
    pub total_deduction: Decimal,
    /// Sum of row gross pay.
    pub gross_pay: Decimal,
    /// Sum of row net pay.
    pub net_pay: Decimal,
    /// Number of rows.
    pub employee_count: usize,
}

impl PayrollTotals {
    /// Adds a row's summary to the totals.
    pub fn add(&mut self, summary: &PayrollSummary) {
        self.total_hours += summary.total_hours;
        self.total_deduction += summary.total_deduction;
        self.gross_pay += summary.gross_pay;
        self.net_pay += summary.net_pay;
        self.employee_count += 1;
    }
}

/// The weekly payroll report shown to administrators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the figures.
    pub engine_version: String,
    /// The week covered.
    pub window: PayWindow,
    /// One row per employee with attendance in the week.
    pub rows: Vec<PayrollRow>,
    /// Column totals.
    pub totals: PayrollTotals,
}
