//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct, one per employee per
//! work session, and the informational [`AttendanceStatus`] enum.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Informational attendance status. Not consumed by the pay computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee attended.
    #[default]
    Present,
    /// The employee did not attend.
    Absent,
    /// The employee attended but clocked in late.
    Late,
    /// The employee was on approved leave.
    OnLeave,
}

/// A single work session for one employee.
///
/// `date` is the authoritative grouping key. A session that starts at 22:00
/// and ends at 06:00 the next morning still belongs to `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee that owns the record.
    pub employee_id: String,
    /// The calendar day the session belongs to.
    pub date: NaiveDate,
    /// When the employee clocked in.
    #[serde(default)]
    pub time_in: Option<NaiveDateTime>,
    /// When the employee clocked out. `None` while the session is open.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    /// When the break started, if one was taken.
    #[serde(default)]
    pub break_start: Option<NaiveDateTime>,
    /// When the break ended. `None` while a break is in progress.
    #[serde(default)]
    pub break_end: Option<NaiveDateTime>,
    /// Informational status.
    #[serde(default)]
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if the employee clocked in but has not clocked out.
    pub fn is_open(&self) -> bool {
        self.time_in.is_some() && self.time_out.is_none()
    }

    /// Returns true if a break has started and not yet ended.
    pub fn break_in_progress(&self) -> bool {
        self.break_start.is_some() && self.break_end.is_none()
    }

    /// Minutes between clock-in and clock-out, if both are present.
    ///
    /// The value is negative when the clock-out precedes the clock-in.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::{NaiveDate, NaiveDateTime};
    ///
    /// let record = AttendanceRecord {
    ///     id: "att_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     time_in: Some(NaiveDateTime::parse_from_str("2026-01-15 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     time_out: Some(NaiveDateTime::parse_from_str("2026-01-16 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     break_start: None,
    ///     break_end: None,
    ///     status: AttendanceStatus::Present,
    /// };
    /// assert_eq!(record.elapsed_minutes(), Some(480));
    /// ```
    pub fn elapsed_minutes(&self) -> Option<i64> {
        match (self.time_in, self.time_out) {
            (Some(time_in), Some(time_out)) => Some((time_out - time_in).num_minutes()),
            _ => None,
        }
    }

    /// Minutes between break start and break end, if both are present.
    pub fn break_minutes(&self) -> Option<i64> {
        match (self.break_start, self.break_end) {
            (Some(start), Some(end)) => Some((end - start).num_minutes()),
            _ => None,
        }
    }
}
