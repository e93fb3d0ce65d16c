//! Pay policy.
//!
//! The policy holds the company rules the engine applies on top of raw
//! attendance. Today that is only the paid break allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minutes of break time per session that are not penalised.
pub const DEFAULT_BREAK_ALLOWANCE_MINUTES: i64 = 60;

/// Highest hourly rate the engine pays. Larger rates are clamped to it so
/// pay arithmetic stays inside `Decimal` range.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// Company rules applied by the pay engine.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{PayPolicy, DEFAULT_BREAK_ALLOWANCE_MINUTES};
///
/// let policy = PayPolicy::default();
/// assert_eq!(policy.break_allowance_minutes, DEFAULT_BREAK_ALLOWANCE_MINUTES);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Break minutes beyond this are deducted at the hourly rate.
    pub break_allowance_minutes: i64,
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            break_allowance_minutes: DEFAULT_BREAK_ALLOWANCE_MINUTES,
        }
    }
}

/// Converts a minute count to hours.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Clamps a rate into `0..=MAX_HOURLY_RATE`.
pub(crate) fn normalize_rate(hourly_rate: Decimal) -> Decimal {
    if hourly_rate < Decimal::ZERO {
        warn!(hourly_rate = %hourly_rate, "Negative hourly rate treated as zero");
        return Decimal::ZERO;
    }
    if hourly_rate > MAX_HOURLY_RATE {
        warn!(
            hourly_rate = %hourly_rate,
            max = %MAX_HOURLY_RATE,
            "Hourly rate above maximum clamped"
        );
        return MAX_HOURLY_RATE;
    }
    hourly_rate
}
