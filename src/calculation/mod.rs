//! Calculation logic for the payroll engine.
//!
//! This module turns attendance records into pay: per-record hours and
//! break-overage deductions, window filtering by record date, and the
//! aggregation into a [`PayrollSummary`](crate::models::PayrollSummary).
//! Everything here is pure and performs no I/O.

mod policy;
mod record_pay;
mod summary;
mod window_filter;

pub use policy::{DEFAULT_BREAK_ALLOWANCE_MINUTES, MAX_HOURLY_RATE, PayPolicy};
pub use record_pay::compute_record_pay;
pub use summary::{compute_breakdown, compute_summary, compute_summary_with_policy};
pub use window_filter::records_in_window;
