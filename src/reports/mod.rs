//! Report builders.
//!
//! The weekly payroll report, the employee payslip and the portal payslip
//! are all built from [`compute_breakdown`](crate::calculation::compute_breakdown)
//! with the configured policy, then rounded for display.

mod payslip;
mod weekly;

pub use payslip::{employee_payslip, portal_payslip};
pub use weekly::weekly_payroll_report;

/// Version stamped on every generated report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
