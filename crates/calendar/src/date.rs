//! Gregorian calendar day backed by `chrono::NaiveDate`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::month::days_in_month;

/// A calendar day in the proleptic Gregorian calendar.
///
/// Ordering is chronological. The supported year range is chrono's
/// (roughly ±262,000 years).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12,
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month of
    /// that year (February 29 is only valid in leap years), or
    /// [`CalendarError::YearOutOfRange`] if chrono cannot represent `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange { year })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the next calendar day, or `None` past chrono's last date.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Date) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// The underlying chrono date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses a `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::InvalidDate {
                text: s.to_string(),
            })
    }
}
