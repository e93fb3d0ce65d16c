//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_window;
mod payroll_summary;
mod payslip;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use pay_window::PayWindow;
pub use payroll_summary::{PayrollBreakdown, PayrollSummary, RecordPay, SessionState};
pub use payslip::{PayrollRow, PayrollTotals, Payslip, WeeklyPayrollReport};
