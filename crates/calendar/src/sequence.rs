//! Inclusive date ranges.

use std::iter::FusedIterator;

use crate::date::Date;

/// Iterator over every day from a start date to an end date, inclusive.
///
/// Created by [`date_range`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

/// Returns an iterator over every day in `[start, end]`.
///
/// Days are stepped with [`Date::succ`], so month and year boundaries and
/// leap Februaries follow chrono's Gregorian calendar. The iterator is empty
/// when `start > end`.
///
/// # Example
///
/// ```ignore
/// let start = Date::new(2025, 12, 30).unwrap();
/// let end = Date::new(2026, 1, 2).unwrap();
/// assert_eq!(date_range(start, end).count(), 4);
/// ```
pub fn date_range(start: Date, end: Date) -> DateRange {
    DateRange {
        next: (start <= end).then_some(start),
        end,
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = current.succ().filter(|&d| d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) => {
                let n = (current.days_until(self.end) + 1) as usize;
                (n, Some(n))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}
