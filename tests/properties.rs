//! Property-based tests for the pay engine.
//!
//! These check the invariants every summary must satisfy for arbitrary
//! attendance, including open, malformed and break-in-progress records.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{PayPolicy, compute_breakdown, compute_summary};
use payroll_engine::models::{AttendanceRecord, AttendanceStatus, PayWindow};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

/// Strategy for hourly rates between 0.00 and 200.00.
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=20_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a record dated somewhere in January 2026.
///
/// Elapsed and break lengths may be negative so malformed punches are
/// covered; clock-out and break-end are sometimes missing.
fn record_strategy() -> impl Strategy<Value = AttendanceRecord> {
    (
        0i64..31,
        0i64..1440,
        -120i64..900,
        any::<bool>(),
        0i64..480,
        -30i64..180,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(day, start, elapsed, closed, break_offset, break_len, has_break, break_closed)| {
                let date = base_date() + Duration::days(day);
                let time_in = midnight(date) + Duration::minutes(start);
                let break_start = time_in + Duration::minutes(break_offset);
                AttendanceRecord {
                    id: format!("att_{}_{}", day, start),
                    employee_id: "emp_001".to_string(),
                    date,
                    time_in: Some(time_in),
                    time_out: closed.then(|| time_in + Duration::minutes(elapsed)),
                    break_start: has_break.then_some(break_start),
                    break_end: (has_break && break_closed)
                        .then(|| break_start + Duration::minutes(break_len)),
                    status: AttendanceStatus::Present,
                }
            },
        )
}

fn records_strategy() -> impl Strategy<Value = Vec<AttendanceRecord>> {
    prop::collection::vec(record_strategy(), 0..20)
}

fn window_strategy() -> impl Strategy<Value = PayWindow> {
    (0i64..31, 0i64..14).prop_map(|(start, len)| {
        let start_date = base_date() + Duration::days(start);
        PayWindow {
            start_date,
            end_date: start_date + Duration::days(len),
        }
    })
}

proptest! {
    /// Property: net pay is exactly gross pay minus deductions.
    #[test]
    fn prop_net_is_gross_minus_deduction(
        rate in rate_strategy(),
        records in records_strategy(),
        window in window_strategy(),
    ) {
        let summary = compute_breakdown(&PayPolicy::default(), rate, &records, &window).summary;
        prop_assert_eq!(summary.net_pay, summary.gross_pay - summary.total_deduction);
    }

    /// Property: hours, deductions and gross pay are never negative.
    #[test]
    fn prop_totals_non_negative(
        rate in rate_strategy(),
        records in records_strategy(),
        window in window_strategy(),
    ) {
        let summary = compute_breakdown(&PayPolicy::default(), rate, &records, &window).summary;
        prop_assert!(summary.total_hours >= Decimal::ZERO);
        prop_assert!(summary.total_deduction >= Decimal::ZERO);
        prop_assert!(summary.gross_pay >= Decimal::ZERO);
    }

    /// Property: the same inputs always give the same output.
    #[test]
    fn prop_idempotent(
        rate in rate_strategy(),
        records in records_strategy(),
        window in window_strategy(),
    ) {
        let first = compute_summary(rate, &records, window.start_date, window.end_date);
        let second = compute_summary(rate, &records, window.start_date, window.end_date);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_string_fields(), second.to_string_fields());
    }

    /// Property: record_count is the number of records dated inside the
    /// window, wherever their punches fall.
    #[test]
    fn prop_record_count_follows_date(
        rate in rate_strategy(),
        records in records_strategy(),
        window in window_strategy(),
    ) {
        let expected = records.iter().filter(|r| window.contains_date(r.date)).count();
        let breakdown = compute_breakdown(&PayPolicy::default(), rate, &records, &window);
        prop_assert_eq!(breakdown.summary.record_count, expected);
        prop_assert_eq!(breakdown.lines.len(), expected);
    }

    /// Property: lines add up to the summary.
    #[test]
    fn prop_lines_sum_to_summary(
        rate in rate_strategy(),
        records in records_strategy(),
        window in window_strategy(),
    ) {
        let breakdown = compute_breakdown(&PayPolicy::default(), rate, &records, &window);
        let hours: Decimal = breakdown.lines.iter().map(|l| l.paid_hours).sum();
        let deduction: Decimal = breakdown.lines.iter().map(|l| l.deduction).sum();
        prop_assert_eq!(hours, breakdown.summary.total_hours);
        prop_assert_eq!(deduction, breakdown.summary.total_deduction);
    }

    /// Property: no records means an all-zero summary.
    #[test]
    fn prop_empty_records_all_zero(rate in rate_strategy(), window in window_strategy()) {
        let summary = compute_summary(rate, &[], window.start_date, window.end_date);
        prop_assert_eq!(summary.record_count, 0);
        prop_assert_eq!(summary.total_hours, Decimal::ZERO);
        prop_assert_eq!(summary.total_deduction, Decimal::ZERO);
        prop_assert_eq!(summary.gross_pay, Decimal::ZERO);
        prop_assert_eq!(summary.net_pay, Decimal::ZERO);
    }

    /// Property: rounding for display keeps net reconciled.
    #[test]
    fn prop_rounded_net_reconciles(
        rate in rate_strategy(),
        records in records_strategy(),
        window in window_strategy(),
        places in 0u32..=4,
    ) {
        let summary = compute_breakdown(&PayPolicy::default(), rate, &records, &window)
            .summary
            .rounded(places);
        prop_assert_eq!(summary.net_pay, summary.gross_pay - summary.total_deduction);
        prop_assert!(summary.gross_pay.scale() <= places);
    }
}

/// Bit-identical comparison helper: `Decimal` equality ignores scale.
trait StringFields {
    fn to_string_fields(&self) -> [String; 4];
}

impl StringFields for payroll_engine::models::PayrollSummary {
    fn to_string_fields(&self) -> [String; 4] {
        [
            self.total_hours.to_string(),
            self.total_deduction.to_string(),
            self.gross_pay.to_string(),
            self.net_pay.to_string(),
        ]
    }
}
