//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering every problem in an input
//! file into a single [`IoError::Validation`], plus the header check used by
//! the CSV reader.

use csv::StringRecord;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Header lookup
// ---------------------------------------------------------------------------

/// Finds the index of every `required` column in `headers`.
///
/// Header names are compared after trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`IoError::MissingColumns`] naming every absent column.
pub(crate) fn locate_columns<const N: usize>(
    headers: &StringRecord,
    required: [&str; N],
) -> Result<[usize; N], IoError> {
    let mut indices = [0usize; N];
    let mut missing = Vec::new();
    for (slot, name) in indices.iter_mut().zip(required) {
        match headers.iter().position(|h| h.trim() == name) {
            Some(i) => *slot = i,
            None => missing.push(name),
        }
    }
    if !missing.is_empty() {
        return Err(IoError::MissingColumns {
            missing: missing.join(", "),
            found: headers.iter().map(str::trim).collect::<Vec<_>>().join(", "),
        });
    }
    Ok(indices)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
