//! Pay window model.
//!
//! A [`PayWindow`] is the inclusive date range over which attendance records
//! are aggregated: a week for the payroll report, all-time for the employee
//! detail page, or an arbitrary period.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayWindow;
/// use chrono::NaiveDate;
///
/// let window = PayWindow::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// ).unwrap();
///
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // start date
/// assert!(window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap())); // end date
/// assert!(!window.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayWindow {
    /// The first day of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the window (inclusive).
    pub end_date: NaiveDate,
}

impl PayWindow {
    /// Creates a window, rejecting one that ends before it starts.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidWindow {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// A window covering every representable date.
    pub fn all_time() -> Self {
        Self {
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
        }
    }

    /// The seven-day week containing `date`, starting on `week_start`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayWindow;
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// // 2026-01-15 is a Thursday
    /// let week = PayWindow::week_containing(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), Weekday::Mon);
    /// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
    /// assert_eq!(week.end_date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
    /// ```
    pub fn week_containing(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = (7 + date.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;
        let start_date = date
            .checked_sub_signed(Duration::days(i64::from(offset)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start_date,
            end_date: start_date
                .checked_add_signed(Duration::days(6))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Checks if a given date falls within this window (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if this window spans every representable date.
    pub fn is_all_time(&self) -> bool {
        self.start_date == NaiveDate::MIN && self.end_date == NaiveDate::MAX
    }
}
