//! Payroll aggregation.
//!
//! This is the single entry point every presentation surface goes through.
//! The weekly report, the employee payslip and the portal payslip all call
//! [`compute_breakdown`] so the same employee and window always produce the
//! same figures.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, PayWindow, PayrollBreakdown, PayrollSummary, RecordPay};

use super::policy::{PayPolicy, normalize_rate};
use super::record_pay::compute_record_pay;
use super::window_filter::records_in_window;

/// Computes the payroll summary for one employee over an inclusive date
/// window, using the default pay policy.
///
/// This function is total: empty input, zero rates, open sessions and
/// malformed punches all produce a defined summary.
///
/// # Arguments
///
/// * `hourly_rate` - The employee's rate (negative values are treated as zero,
///   values above [`MAX_HOURLY_RATE`](crate::calculation::MAX_HOURLY_RATE) as the maximum)
/// * `records` - Attendance records in any order
/// * `window_start` - First day of the window (inclusive)
/// * `window_end` - Last day of the window (inclusive)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_summary;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let day = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let records = vec![AttendanceRecord {
///     id: "att_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: day,
///     time_in: Some(at("2026-01-15 09:00")),
///     time_out: Some(at("2026-01-15 17:00")),
///     break_start: None,
///     break_end: None,
///     status: AttendanceStatus::Present,
/// }];
///
/// let summary = compute_summary(Decimal::new(2000, 2), &records, day, day);
/// assert_eq!(summary.total_hours, Decimal::new(8, 0));
/// assert_eq!(summary.gross_pay, Decimal::new(16000, 2));
/// assert_eq!(summary.net_pay, Decimal::new(16000, 2));
/// assert_eq!(summary.record_count, 1);
/// ```
pub fn compute_summary(
    hourly_rate: Decimal,
    records: &[AttendanceRecord],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> PayrollSummary {
    compute_summary_with_policy(
        &PayPolicy::default(),
        hourly_rate,
        records,
        window_start,
        window_end,
    )
}

/// Same as [`compute_summary`] with an explicit pay policy.
pub fn compute_summary_with_policy(
    policy: &PayPolicy,
    hourly_rate: Decimal,
    records: &[AttendanceRecord],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> PayrollSummary {
    let window = PayWindow {
        start_date: window_start,
        end_date: window_end,
    };
    compute_breakdown(policy, hourly_rate, records, &window).summary
}

/// Computes the per-record lines and their summary in one pass.
///
/// Records outside the window are dropped entirely. Every record inside it
/// yields a line and counts towards `record_count`, but only completed
/// sessions add hours or deductions.
pub fn compute_breakdown(
    policy: &PayPolicy,
    hourly_rate: Decimal,
    records: &[AttendanceRecord],
    window: &PayWindow,
) -> PayrollBreakdown {
    let rate = normalize_rate(hourly_rate);

    let lines: Vec<RecordPay> = records_in_window(records, window)
        .into_iter()
        .map(|record| compute_record_pay(record, rate, policy))
        .collect();

    let total_hours: Decimal = lines.iter().map(|line| line.paid_hours).sum();
    let total_deduction: Decimal = lines.iter().map(|line| line.deduction).sum();
    let gross_pay = total_hours * rate;

    let summary = PayrollSummary {
        total_hours,
        total_deduction,
        gross_pay,
        net_pay: gross_pay - total_deduction,
        record_count: lines.len(),
    };

    PayrollBreakdown { lines, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::MAX_HOURLY_RATE;
    use crate::models::{AttendanceStatus, SessionState};
    use chrono::NaiveDateTime;
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

    fn create_record(
        id: &str,
        date: &str,
        shift: Option<(&str, &str)>,
        break_span: Option<(&str, &str)>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            time_in: shift.map(|(start, _)| make_datetime(date, start)),
            time_out: shift.map(|(_, end)| make_datetime(date, end)),
            break_start: break_span.map(|(start, _)| make_datetime(date, start)),
            break_end: break_span.map(|(_, end)| make_datetime(date, end)),
            status: AttendanceStatus::Present,
        }
    }

    fn nine_to_five(id: &str, date: &str, break_span: Option<(&str, &str)>) -> AttendanceRecord {
        create_record(id, date, Some(("09:00:00", "17:00:00")), break_span)
    }

    fn week_start() -> NaiveDate {
        make_date("2026-01-12")
    }

    fn week_end() -> NaiveDate {
        make_date("2026-01-18")
    }

    /// PS-001: empty input produces an all-zero summary
    #[test]
    fn test_empty_records() {
        let summary = compute_summary(dec("20.00"), &[], week_start(), week_end());
        assert_eq!(summary, PayrollSummary::default());
    }

    /// PS-002: worked example 1, no break
    #[test]
    fn test_no_break() {
        let records = vec![nine_to_five("att_1", "2026-01-13", None)];
        let summary = compute_summary(dec("20.00"), &records, week_start(), week_end());

        assert_eq!(summary.total_hours, dec("8.0"));
        assert_eq!(summary.total_deduction, dec("0.0"));
        assert_eq!(summary.gross_pay, dec("160.00"));
        assert_eq!(summary.net_pay, dec("160.00"));
        assert_eq!(summary.record_count, 1);
    }

    /// PS-003: worked example 2, 45 minute break within allowance
    #[test]
    fn test_break_within_allowance() {
        let records = vec![nine_to_five(
            "att_1",
            "2026-01-13",
            Some(("12:00:00", "12:45:00")),
        )];
        let summary = compute_summary(dec("20.00"), &records, week_start(), week_end());

        assert_eq!(summary.total_hours, dec("7.25"));
        assert_eq!(summary.total_deduction, Decimal::ZERO);
        assert_eq!(summary.gross_pay, dec("145.00"));
        assert_eq!(summary.net_pay, dec("145.00"));
    }

    /// PS-004: worked example 3, 90 minute break exceeds allowance
    #[test]
    fn test_break_exceeding_allowance() {
        let records = vec![nine_to_five(
            "att_1",
            "2026-01-13",
            Some(("12:00:00", "13:30:00")),
        )];
        let summary = compute_summary(dec("20.00"), &records, week_start(), week_end());

        assert_eq!(summary.total_hours, dec("6.5"));
        assert_eq!(summary.total_deduction, dec("10.00"));
        assert_eq!(summary.gross_pay, dec("130.00"));
        assert_eq!(summary.net_pay, dec("120.00"));
    }

    /// PS-005: worked example 4, open session counts but contributes nothing
    #[test]
    fn test_open_session_counts_record() {
        let mut open = create_record("att_open", "2026-01-13", None, None);
        open.time_in = Some(make_datetime("2026-01-13", "09:00:00"));
        let records = vec![open];

        let summary = compute_summary(dec("20.00"), &records, week_start(), week_end());

        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.total_deduction, Decimal::ZERO);
        assert_eq!(summary.gross_pay, Decimal::ZERO);
        assert_eq!(summary.record_count, 1);
    }

    /// PS-006: worked example 5, zero rate
    #[test]
    fn test_zero_rate() {
        let records = vec![nine_to_five(
            "att_1",
            "2026-01-13",
            Some(("12:00:00", "14:00:00")),
        )];
        let summary = compute_summary(Decimal::ZERO, &records, week_start(), week_end());

        assert_eq!(summary.total_hours, dec("6"));
        assert_eq!(summary.gross_pay, Decimal::ZERO);
        assert_eq!(summary.total_deduction, Decimal::ZERO);
        assert_eq!(summary.net_pay, Decimal::ZERO);
    }

    /// PS-007: records outside the window are ignored entirely
    #[test]
    fn test_records_outside_window_ignored() {
        let records = vec![
            nine_to_five("before", "2026-01-11", None),
            nine_to_five("inside", "2026-01-14", None),
            nine_to_five("after", "2026-01-19", None),
        ];
        let summary = compute_summary(dec("20.00"), &records, week_start(), week_end());

        assert_eq!(summary.record_count, 1);
        assert_eq!(summary.total_hours, dec("8"));
    }

    #[test]
    fn test_week_of_mixed_records() {
        let records = vec![
            nine_to_five("mon", "2026-01-12", None),
            nine_to_five("tue", "2026-01-13", Some(("12:00:00", "12:45:00"))),
            nine_to_five("wed", "2026-01-14", Some(("12:00:00", "13:30:00"))),
            create_record("thu", "2026-01-15", Some(("17:00:00", "09:00:00")), None),
            create_record("fri", "2026-01-16", None, None),
        ];
        let breakdown = compute_breakdown(
            &PayPolicy::default(),
            dec("20.00"),
            &records,
            &PayWindow::new(week_start(), week_end()).unwrap(),
        );

        // 8 + 7.25 + 6.5
        assert_eq!(breakdown.summary.total_hours, dec("21.75"));
        assert_eq!(breakdown.summary.total_deduction, dec("10"));
        assert_eq!(breakdown.summary.gross_pay, dec("435.00"));
        assert_eq!(breakdown.summary.net_pay, dec("425.00"));
        assert_eq!(breakdown.summary.record_count, 5);

        let states: Vec<SessionState> = breakdown.lines.iter().map(|l| l.session).collect();
        assert_eq!(
            states,
            vec![
                SessionState::Completed,
                SessionState::Completed,
                SessionState::Completed,
                SessionState::Malformed,
                SessionState::Open,
            ]
        );
    }

    #[test]
    fn test_lines_sum_to_summary() {
        let records = vec![
            nine_to_five("a", "2026-01-12", Some(("12:00:00", "13:07:00"))),
            nine_to_five("b", "2026-01-13", Some(("12:00:00", "13:07:00"))),
            nine_to_five("c", "2026-01-14", Some(("12:00:00", "13:07:00"))),
        ];
        let breakdown = compute_breakdown(
            &PayPolicy::default(),
            dec("20.00"),
            &records,
            &PayWindow::new(week_start(), week_end()).unwrap(),
        );

        let hours: Decimal = breakdown.lines.iter().map(|l| l.paid_hours).sum();
        let deduction: Decimal = breakdown.lines.iter().map(|l| l.deduction).sum();
        assert_eq!(breakdown.summary.total_hours, hours);
        assert_eq!(breakdown.summary.total_deduction, deduction);
        assert_eq!(
            breakdown.summary.net_pay,
            breakdown.summary.gross_pay - breakdown.summary.total_deduction
        );
    }

    #[test]
    fn test_negative_rate_treated_as_zero() {
        let records = vec![nine_to_five(
            "att_1",
            "2026-01-13",
            Some(("12:00:00", "14:00:00")),
        )];
        let summary = compute_summary(dec("-20.00"), &records, week_start(), week_end());

        assert_eq!(summary.gross_pay, Decimal::ZERO);
        assert_eq!(summary.total_deduction, Decimal::ZERO);
        assert!(summary.net_pay <= summary.gross_pay);
    }

    /// PS-008: very large rates are clamped to the maximum and never overflow
    #[test]
    fn test_huge_rate_is_clamped() {
        let records = vec![nine_to_five(
            "att_1",
            "2026-01-13",
            Some(("12:00:00", "13:30:00")),
        )];

        for rate in [Decimal::MAX / dec("4"), Decimal::MAX] {
            let summary = compute_summary(rate, &records, week_start(), week_end());
            let capped = compute_summary(MAX_HOURLY_RATE, &records, week_start(), week_end());

            assert_eq!(summary, capped);
            assert_eq!(summary.gross_pay, dec("6500000"));
            assert_eq!(summary.total_deduction, dec("500000"));
            assert_eq!(summary.net_pay, summary.gross_pay - summary.total_deduction);
        }
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = vec![
            nine_to_five("a", "2026-01-12", Some(("12:00:00", "13:07:00"))),
            nine_to_five("b", "2026-01-15", Some(("12:00:00", "12:13:00"))),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            compute_summary(dec("17.35"), &forward, week_start(), week_end()),
            compute_summary(dec("17.35"), &reversed, week_start(), week_end())
        );
    }

    #[test]
    fn test_custom_policy_applies() {
        let records = vec![nine_to_five(
            "att_1",
            "2026-01-13",
            Some(("12:00:00", "12:45:00")),
        )];
        let policy = PayPolicy {
            break_allowance_minutes: 30,
        };
        let summary = compute_summary_with_policy(
            &policy,
            dec("20.00"),
            &records,
            week_start(),
            week_end(),
        );

        assert_eq!(summary.total_deduction, dec("5"));
        assert_eq!(summary.net_pay, dec("140.00"));
    }
}
