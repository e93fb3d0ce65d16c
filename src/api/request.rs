//! Request types for the payroll engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! HTTP endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceStatus, PayWindow};

/// Request body for the `/calculate` endpoint.
///
/// Computes a breakdown for ad-hoc records without touching the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The hourly rate to pay the records at.
    pub hourly_rate: Decimal,
    /// The window to aggregate over.
    pub window: WindowRequest,
    /// The attendance records to consider.
    #[serde(default)]
    pub records: Vec<RecordRequest>,
}

/// Window bounds in a calculation request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowRequest {
    /// The first day of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the window (inclusive).
    pub end_date: NaiveDate,
}

impl TryFrom<WindowRequest> for PayWindow {
    type Error = crate::error::EngineError;

    fn try_from(req: WindowRequest) -> EngineResult<Self> {
        PayWindow::new(req.start_date, req.end_date)
    }
}

/// An attendance record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The owning employee. Optional for ad-hoc calculations.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The calendar day the session belongs to.
    pub date: NaiveDate,
    /// When the employee clocked in.
    #[serde(default)]
    pub time_in: Option<NaiveDateTime>,
    /// When the employee clocked out.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    /// When the break started.
    #[serde(default)]
    pub break_start: Option<NaiveDateTime>,
    /// When the break ended.
    #[serde(default)]
    pub break_end: Option<NaiveDateTime>,
    /// Informational status.
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl From<RecordRequest> for AttendanceRecord {
    fn from(req: RecordRequest) -> Self {
        AttendanceRecord {
            id: req.id,
            employee_id: req.employee_id.unwrap_or_default(),
            date: req.date,
            time_in: req.time_in,
            time_out: req.time_out,
            break_start: req.break_start,
            break_end: req.break_end,
            status: req.status,
        }
    }
}

/// Body for the attendance punch endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PunchRequest {
    /// When the punch happened.
    pub at: NaiveDateTime,
}

/// Query string for `GET /payroll/weekly`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeeklyReportQuery {
    /// Any day in the wanted week. Defaults to today.
    pub week_of: Option<NaiveDate>,
}

/// Query string for the payslip endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayslipQuery {
    /// First day of the window.
    pub start_date: Option<NaiveDate>,
    /// Last day of the window.
    pub end_date: Option<NaiveDate>,
    /// Reference day for the portal's default week. Defaults to today.
    pub as_of: Option<NaiveDate>,
}

impl PayslipQuery {
    /// The explicit window, if either bound was given. A missing bound is
    /// open-ended.
    pub fn window(&self) -> EngineResult<Option<PayWindow>> {
        match (self.start_date, self.end_date) {
            (None, None) => Ok(None),
            (start, end) => PayWindow::new(
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )
            .map(Some),
        }
    }
}
