//! Attendance-based hours accrual and payroll engine.
//!
//! This crate turns clock-in, break and clock-out punches into paid hours,
//! break-overage deductions, gross and net pay. The same engine backs the
//! weekly payroll report, the employee payslip and the self-service portal
//! payslip, so one employee and window always produce one set of figures.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
