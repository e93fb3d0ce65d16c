//! Payroll summary models.
//!
//! This module contains the [`PayrollSummary`] produced by the pay engine,
//! the per-record [`RecordPay`] lines behind it, and the
//! [`PayrollBreakdown`] that pairs the two.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Hours are always displayed to two places, independent of currency.
const HOURS_DECIMAL_PLACES: u32 = 2;

/// How a single record was treated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Both clock-in and clock-out were present and ordered.
    Completed,
    /// The session has not been clocked out (or never clocked in).
    Open,
    /// Clock-out precedes clock-in. Contributes nothing.
    Malformed,
}

/// The engine's figures for one attendance record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{RecordPay, SessionState};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let line = RecordPay {
///     record_id: "att_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     time_in: None,
///     time_out: None,
///     session: SessionState::Open,
///     elapsed_minutes: 0,
///     break_minutes: 0,
///     overage_minutes: 0,
///     paid_minutes: 0,
///     paid_hours: Decimal::ZERO,
///     deduction: Decimal::ZERO,
/// };
/// assert!(!line.contributes());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPay {
    /// The attendance record this line was computed from.
    pub record_id: String,
    /// The record's grouping date.
    pub date: NaiveDate,
    /// Clock-in, copied for display.
    pub time_in: Option<NaiveDateTime>,
    /// Clock-out, copied for display.
    pub time_out: Option<NaiveDateTime>,
    /// How the record was treated.
    pub session: SessionState,
    /// Minutes between clock-in and clock-out (zero unless completed).
    pub elapsed_minutes: i64,
    /// Minutes spent on break (zero unless the break was completed).
    pub break_minutes: i64,
    /// Break minutes beyond the paid allowance.
    pub overage_minutes: i64,
    /// `elapsed_minutes - break_minutes`, never below zero.
    pub paid_minutes: i64,
    /// `paid_minutes / 60`.
    pub paid_hours: Decimal,
    /// Amount clawed back for the break overage.
    pub deduction: Decimal,
}

impl RecordPay {
    /// Returns true if this line adds hours or a deduction to the summary.
    pub fn contributes(&self) -> bool {
        self.session == SessionState::Completed
    }
}

/// Aggregated pay figures for one employee over one window.
///
/// `net_pay` is always exactly `gross_pay - total_deduction`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollSummary;
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary::default();
/// assert_eq!(summary.net_pay, Decimal::ZERO);
/// assert_eq!(summary.record_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Paid hours across all qualifying records.
    pub total_hours: Decimal,
    /// Break-overage deductions in currency units.
    pub total_deduction: Decimal,
    /// `total_hours * hourly_rate`.
    pub gross_pay: Decimal,
    /// `gross_pay - total_deduction`.
    pub net_pay: Decimal,
    /// Number of records inside the window, complete or not.
    pub record_count: usize,
}

impl PayrollSummary {
    /// Returns true if no record fell inside the window.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Rounds the summary for display.
    ///
    /// Hours are rounded to two places and money to `currency_places`,
    /// midpoint away from zero. `net_pay` is recomputed from the rounded
    /// gross and deduction so the two always reconcile on screen.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollSummary;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let summary = PayrollSummary {
    ///     total_hours: Decimal::from_str("0.116666666666666666").unwrap(),
    ///     total_deduction: Decimal::ZERO,
    ///     gross_pay: Decimal::from_str("2.333333333333333333").unwrap(),
    ///     net_pay: Decimal::from_str("2.333333333333333333").unwrap(),
    ///     record_count: 1,
    /// };
    /// let rounded = summary.rounded(2);
    /// assert_eq!(rounded.total_hours, Decimal::from_str("0.12").unwrap());
    /// assert_eq!(rounded.net_pay, Decimal::from_str("2.33").unwrap());
    /// ```
    pub fn rounded(&self, currency_places: u32) -> Self {
        let total_hours = self
            .total_hours
            .round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let gross_pay = self
            .gross_pay
            .round_dp_with_strategy(currency_places, RoundingStrategy::MidpointAwayFromZero);
        let total_deduction = self
            .total_deduction
            .round_dp_with_strategy(currency_places, RoundingStrategy::MidpointAwayFromZero);

        Self {
            total_hours,
            total_deduction,
            gross_pay,
            net_pay: gross_pay - total_deduction,
            record_count: self.record_count,
        }
    }
}

/// A summary together with the per-record lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// One line per record inside the window, ordered by date and clock-in.
    pub lines: Vec<RecordPay>,
    /// The aggregate of `lines`.
    pub summary: PayrollSummary,
}
