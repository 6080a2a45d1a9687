//! Error types for summercal-highlight.

use summercal_calendar::Date;

/// Error type for constructing events and palettes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// Returned when an event's start date falls after its end date.
    #[error("invalid range for {label:?}: start {start} is after end {end}")]
    InvalidRange {
        /// Start date that was provided.
        start: Date,
        /// End date that was provided.
        end: Date,
        /// Label of the offending event.
        label: String,
    },

    /// Returned when a palette is built with no colors.
    #[error("palette must contain at least one color")]
    EmptyPalette,
}
