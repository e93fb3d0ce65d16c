//! Window filtering.
//!
//! Records are selected by their `date`, never by their clock-in or
//! clock-out instants.

use crate::models::{AttendanceRecord, PayWindow};

/// Returns the records whose `date` lies inside `window`, ordered by date,
/// then clock-in, then id.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::records_in_window;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus, PayWindow};
/// use chrono::NaiveDate;
///
/// let day = |d: u32| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let record = |id: &str, d: u32| AttendanceRecord {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     date: day(d),
///     time_in: None,
///     time_out: None,
///     break_start: None,
///     break_end: None,
///     status: AttendanceStatus::Absent,
/// };
///
/// let records = vec![record("b", 14), record("a", 11), record("c", 12)];
/// let window = PayWindow::new(day(12), day(18)).unwrap();
/// let selected: Vec<&str> = records_in_window(&records, &window)
///     .iter()
///     .map(|r| r.id.as_str())
///     .collect();
/// assert_eq!(selected, vec!["c", "b"]);
/// ```
pub fn records_in_window<'a>(
    records: &'a [AttendanceRecord],
    window: &PayWindow,
) -> Vec<&'a AttendanceRecord> {
    let mut selected: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|record| window.contains_date(record.date))
        .collect();

    selected.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.time_in.cmp(&b.time_in))
            .then_with(|| a.id.cmp(&b.id))
    });
    selected
}
