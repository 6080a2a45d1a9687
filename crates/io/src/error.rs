//! Error types for summercal-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the summercal-io crate.
///
/// This enum covers file-system failures, CSV decoding errors, missing
/// columns, and accumulated row validation problems encountered when reading
/// events or writing the rendered document.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system error on a specific path.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV decoder.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when one or more required columns are absent from the header.
    #[error("missing column(s) {missing} (found: {found})")]
    MissingColumns {
        /// Comma-separated names of the absent columns.
        missing: String,
        /// Comma-separated names of the columns that are present.
        found: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
