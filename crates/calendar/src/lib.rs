//! # summercal-calendar
//!
//! Gregorian calendar primitives built on `chrono::NaiveDate`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Date"] -->|".succ()"| A
//!     A -->|"date_range()"| B["DateRange (inclusive)"]
//!     A -->|".weekday()"| C["chrono::Weekday"]
//!     D["MonthSpec"] -->|".first_day() / .last_day()"| A
//!     D -->|"month_layout()"| E["Vec of Week (7 cells)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use summercal_calendar::{Date, MonthSpec, Weekday, date_range, month_layout};
//!
//! // Day stepping crosses month and year boundaries
//! let start = Date::new(2024, 2, 28).unwrap();
//! let end = Date::new(2024, 3, 1).unwrap();
//! assert_eq!(date_range(start, end).count(), 3); // includes Feb 29
//!
//! // Monday-first week rows
//! let weeks = month_layout(MonthSpec::new(2025, 7).unwrap());
//! assert!(weeks.iter().all(|w| w.len() == 7));
//!
//! // ISO text parses through chrono
//! let day: Date = "2025-07-04".parse().unwrap();
//! assert_eq!(day.weekday(), Weekday::Fri);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date with day stepping, weekday, ISO parsing |
//! | `month` | Leap rule, month lengths, `MonthSpec` |
//! | `sequence` | Inclusive date range iterator |
//! | `layout` | Monday-first month layout and column headers |
//! | `error` | Error types |

mod date;
mod error;
mod layout;
mod month;
mod sequence;

pub use chrono::Weekday;
pub use date::Date;
pub use error::CalendarError;
pub use layout::{WEEKDAYS, Week, month_layout};
pub use month::{MonthSpec, days_in_month, is_leap_year};
pub use sequence::{DateRange, date_range};
