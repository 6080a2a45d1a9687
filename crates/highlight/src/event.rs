//! Labeled inclusive date ranges.

use std::fmt;

use summercal_calendar::{Date, DateRange, date_range};

use crate::error::EventError;

/// A labeled inclusive date range to highlight.
///
/// Fields are private and set once by [`Event::new`], which guarantees
/// `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Event {
    start: Date,
    end: Date,
    label: String,
}

impl Event {
    /// Creates a new event covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidRange`] if `start > end`.
    pub fn new(start: Date, end: Date, label: impl Into<String>) -> Result<Self, EventError> {
        let label = label.into();
        if start > end {
            return Err(EventError::InvalidRange { start, end, label });
        }
        Ok(Self { start, end, label })
    }

    /// First highlighted day.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last highlighted day.
    pub fn end(&self) -> Date {
        self.end
    }

    /// The event label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of days covered, counting both endpoints.
    pub fn n_days(&self) -> usize {
        (self.start.days_until(self.end) + 1) as usize
    }

    /// Every day covered by this event, in order.
    pub fn days(&self) -> DateRange {
        date_range(self.start, self.end)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({}..={})", self.label, self.start, self.end)
    }
}
