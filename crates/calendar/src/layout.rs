//! Monday-first week layout of a month.

use chrono::Weekday;

use crate::date::Date;
use crate::month::MonthSpec;
use crate::sequence::date_range;

/// Column headers of a Monday-first week.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One week row: seven Monday-first cells, `None` outside the month.
pub type Week = [Option<Date>; 7];

/// Lays out `spec` as Monday-first week rows.
///
/// Days before the 1st and after the last day of the month are `None`, so
/// every row has exactly seven cells and column `i` is always `WEEKDAYS[i]`.
/// The result has between four and six rows.
///
/// # Example
///
/// ```ignore
/// // July 2025 starts on a Tuesday.
/// let weeks = month_layout(MonthSpec::new(2025, 7).unwrap());
/// assert!(weeks[0][0].is_none());
/// assert_eq!(weeks[0][1].map(|d| d.day()), Some(1));
/// ```
pub fn month_layout(spec: MonthSpec) -> Vec<Week> {
    let lead = spec.first_day().weekday().num_days_from_monday() as usize;
    let mut weeks: Vec<Week> = Vec::with_capacity(6);
    for (offset, date) in date_range(spec.first_day(), spec.last_day()).enumerate() {
        let slot = lead + offset;
        if slot / 7 == weeks.len() {
            weeks.push([None; 7]);
        }
        weeks[slot / 7][slot % 7] = Some(date);
    }
    weeks
}
