//! Error types for the summercal-calendar crate.

/// Error type for all fallible operations in the summercal-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values in the proleptic Gregorian calendar, unparsable date and month
/// text, and years outside chrono's supported range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Year the day was checked against.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a `YYYY-MM-DD` date string cannot be parsed.
    #[error("invalid date: {text:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The text that failed to parse.
        text: String,
    },

    /// Returned when a `YYYY-MM` month string cannot be parsed.
    #[error("invalid month spec: {text:?} (expected YYYY-MM)")]
    InvalidMonthSpec {
        /// The text that failed to parse.
        text: String,
    },

    /// Returned when a year lies outside the range chrono can represent.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year that was provided.
        year: i32,
    },
}
