//! Per-record hours and deduction calculation.
//!
//! This module turns one attendance record into a [`RecordPay`] line:
//! elapsed time, break time, the break overage, paid minutes and the
//! overage deduction.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AttendanceRecord, RecordPay, SessionState};

use super::policy::{MAX_HOURLY_RATE, PayPolicy, minutes_to_hours};

/// Calculates the pay figures for a single attendance record.
///
/// Only records with both a clock-in and a clock-out contribute. For those:
/// 1. Elapsed minutes are `time_out - time_in`; a negative span marks the
///    record malformed and it contributes nothing
/// 2. Break minutes are `break_end - break_start` when both are set; an
///    unfinished or negative break counts as zero
/// 3. Break minutes beyond the policy allowance are deducted at
///    `hourly_rate / 60` per minute
/// 4. The whole break is unpaid: paid minutes are `elapsed - break`,
///    clamped at zero
///
/// # Arguments
///
/// * `record` - The attendance record
/// * `hourly_rate` - The employee's rate, clamped to `0..=MAX_HOURLY_RATE`
/// * `policy` - The break allowance to apply
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{compute_record_pay, PayPolicy};
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, SessionState};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let record = AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     time_in: Some(at("2026-01-15 09:00")),
///     time_out: Some(at("2026-01-15 17:00")),
///     break_start: Some(at("2026-01-15 12:00")),
///     break_end: Some(at("2026-01-15 13:30")),
///     status: AttendanceStatus::Present,
/// };
///
/// let line = compute_record_pay(&record, Decimal::new(20, 0), &PayPolicy::default());
/// assert_eq!(line.session, SessionState::Completed);
/// assert_eq!(line.paid_hours, Decimal::new(65, 1)); // 6.5 hours
/// assert_eq!(line.deduction, Decimal::new(10, 0)); // 30 min over at $20/h
/// ```
pub fn compute_record_pay(
    record: &AttendanceRecord,
    hourly_rate: Decimal,
    policy: &PayPolicy,
) -> RecordPay {
    let mut line = RecordPay {
        record_id: record.id.clone(),
        date: record.date,
        time_in: record.time_in,
        time_out: record.time_out,
        session: SessionState::Open,
        elapsed_minutes: 0,
        break_minutes: 0,
        overage_minutes: 0,
        paid_minutes: 0,
        paid_hours: Decimal::ZERO,
        deduction: Decimal::ZERO,
    };

    let elapsed_minutes = match record.elapsed_minutes() {
        None => return line,
        Some(minutes) if minutes < 0 => {
            warn!(
                record_id = %record.id,
                employee_id = %record.employee_id,
                elapsed_minutes = minutes,
                "Clock-out precedes clock-in; record contributes nothing"
            );
            line.session = SessionState::Malformed;
            return line;
        }
        Some(minutes) => minutes,
    };

    let break_minutes = match record.break_minutes() {
        Some(minutes) if minutes < 0 => {
            warn!(
                record_id = %record.id,
                employee_id = %record.employee_id,
                break_minutes = minutes,
                "Break ends before it starts; break ignored"
            );
            0
        }
        Some(minutes) => minutes,
        None => 0,
    };

    let overage_minutes = (break_minutes - policy.break_allowance_minutes).max(0);
    let paid_minutes = (elapsed_minutes - break_minutes).max(0);
    let rate = hourly_rate.clamp(Decimal::ZERO, MAX_HOURLY_RATE);

    line.session = SessionState::Completed;
    line.elapsed_minutes = elapsed_minutes;
    line.break_minutes = break_minutes;
    line.overage_minutes = overage_minutes;
    line.paid_minutes = paid_minutes;
    line.paid_hours = minutes_to_hours(paid_minutes);
    line.deduction = Decimal::new(overage_minutes, 0) * rate / Decimal::new(60, 0);
    line
}
