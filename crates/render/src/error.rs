//! Error types for summercal-render.

use summercal_calendar::Date;

/// Error type for all fallible rendering operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// A highlighted day carries a label with no color assigned.
    ///
    /// Colors are assigned from the same events the highlights come from, so
    /// this means the two lookups were built from different inputs.
    #[error("no color assigned to label {label:?} (highlighted on {date})")]
    MissingColor {
        /// Label that has no color.
        label: String,
        /// Highlighted day carrying the label.
        date: Date,
    },

    /// Returned when a document is composed with no months.
    #[error("at least one month is required")]
    NoMonths,
}
