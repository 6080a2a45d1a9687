//! Month lengths, the Gregorian leap rule, and the `MonthSpec` newtype.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::date::Date;
use crate::error::CalendarError;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Years outside chrono's supported range report `false`.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
/// [`CalendarError::YearOutOfRange`] if chrono cannot represent the month.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    last_of_month(year, month).map(|last| last.day() as u8)
}

fn first_of_month(year: i32, month: u8) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, u32::from(month), 1).ok_or(CalendarError::YearOutOfRange { year })
}

fn last_of_month(year: i32, month: u8) -> Result<NaiveDate, CalendarError> {
    let out_of_range = CalendarError::YearOutOfRange { year };
    let first = first_of_month(year, month)?;
    let next_first = if month == 12 {
        year.checked_add(1)
            .and_then(|next_year| NaiveDate::from_ymd_opt(next_year, 1, 1))
    } else {
        first.with_month(u32::from(month) + 1)
    };
    next_first
        .and_then(|d| d.pred_opt())
        .ok_or(out_of_range)
}

/// A requested `(year, month)` unit of rendering.
///
/// Both ends of the month are resolved on construction, so every
/// `MonthSpec` can be laid out as a grid. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthSpec {
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthSpec {
    /// Creates a new `MonthSpec`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::YearOutOfRange`] if chrono cannot represent it.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            first: first_of_month(year, month)?,
            last: last_of_month(year, month)?,
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.first.month() as u8
    }

    /// Returns the English month name, e.g. `"July"`.
    pub fn name(self) -> String {
        self.first.format("%B").to_string()
    }

    /// Number of days in this month.
    pub fn n_days(self) -> u8 {
        self.last.day() as u8
    }

    /// First day of the month.
    pub fn first_day(self) -> Date {
        Date::from(self.first)
    }

    /// Last day of the month.
    pub fn last_day(self) -> Date {
        Date::from(self.last)
    }
}

impl fmt::Display for MonthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthSpec {
    type Err = CalendarError;

    /// Parses a `YYYY-MM` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthSpec {
            text: s.to_string(),
        };
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn days_in_month_common_year() {
        let lengths: Vec<u8> = (1..=12).map(|m| days_in_month(2025, m).unwrap()).collect();
        assert_eq!(lengths, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(lengths.iter().map(|&d| d as u32).sum::<u32>(), 365);
    }

    #[test]
    fn days_in_month_leap_february() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(2025, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2025, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            days_in_month(i32::MAX, 12).unwrap_err(),
            CalendarError::YearOutOfRange { year: i32::MAX }
        );
    }

    #[test]
    fn month_spec_new_rejects_bad_month() {
        assert!(MonthSpec::new(2025, 0).is_err());
        assert!(MonthSpec::new(2025, 13).is_err());
        assert!(MonthSpec::new(2025, 12).is_ok());
    }

    #[test]
    fn month_spec_bounds() {
        let spec = MonthSpec::new(2024, 2).unwrap();
        assert_eq!(spec.year(), 2024);
        assert_eq!(spec.month(), 2);
        assert_eq!(spec.first_day(), Date::new(2024, 2, 1).unwrap());
        assert_eq!(spec.last_day(), Date::new(2024, 2, 29).unwrap());
        assert_eq!(spec.n_days(), 29);
        assert_eq!(spec.name(), "February");
    }

    #[test]
    fn december_ends_on_31st() {
        let spec = MonthSpec::new(2025, 12).unwrap();
        assert_eq!(spec.last_day(), Date::new(2025, 12, 31).unwrap());
        assert_eq!(spec.name(), "December");
    }

    #[test]
    fn month_spec_orders_chronologically() {
        let dec = MonthSpec::new(2025, 12).unwrap();
        let jan = MonthSpec::new(2026, 1).unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn month_spec_display_and_parse() {
        let spec: MonthSpec = "2025-07".parse().unwrap();
        assert_eq!(spec, MonthSpec::new(2025, 7).unwrap());
        assert_eq!(spec.to_string(), "2025-07");
    }

    #[test]
    fn month_spec_parse_errors() {
        assert_eq!(
            "July".parse::<MonthSpec>().unwrap_err(),
            CalendarError::InvalidMonthSpec {
                text: "July".to_string()
            }
        );
        assert!("2025-xx".parse::<MonthSpec>().is_err());
        assert_eq!(
            "2025-13".parse::<MonthSpec>().unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }
}
