//! CSV event reader configuration and orchestration.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use summercal_calendar::Date;
use summercal_highlight::Event;
use tracing::{debug, info, warn};

use crate::error::IoError;
use crate::validate::{ValidationCollector, locate_columns};

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading events from CSV.
///
/// Use the builder methods (`with_*`) to customise column names, the field
/// delimiter, and the date format. The [`Default`] implementation expects a
/// comma-separated file with `start_date`, `end_date`, and `title` columns
/// and `YYYY-MM-DD` dates.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Header name of the start date column.
    start_column: String,
    /// Header name of the end date column.
    end_column: String,
    /// Header name of the label column.
    label_column: String,
    /// Field delimiter byte.
    delimiter: u8,
    /// `chrono` format string for both date columns.
    date_format: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            start_column: "start_date".into(),
            end_column: "end_date".into(),
            label_column: "title".into(),
            delimiter: b',',
            date_format: "%Y-%m-%d".into(),
        }
    }
}

impl ReaderConfig {
    /// Set the start date column name.
    pub fn with_start_column(mut self, name: impl Into<String>) -> Self {
        self.start_column = name.into();
        self
    }

    /// Set the end date column name.
    pub fn with_end_column(mut self, name: impl Into<String>) -> Self {
        self.end_column = name.into();
        self
    }

    /// Set the label column name.
    pub fn with_label_column(mut self, name: impl Into<String>) -> Self {
        self.label_column = name.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the date format used for both date columns.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if a column name is empty, two columns
    /// share a name, the date format is empty, or the delimiter is a quote
    /// or line break.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        let columns = [
            ("start_column", &self.start_column),
            ("end_column", &self.end_column),
            ("label_column", &self.label_column),
        ];
        for (field, name) in columns {
            if name.trim().is_empty() {
                c.push(format!("{field} must not be empty"));
            }
        }
        if self.start_column == self.end_column
            || self.start_column == self.label_column
            || self.end_column == self.label_column
        {
            c.push("start, end and label columns must be distinct");
        }
        if self.date_format.is_empty() {
            c.push("date_format must not be empty");
        }
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            c.push(format!(
                "delimiter {:?} is not allowed",
                char::from(self.delimiter)
            ));
        }
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// read_events / parse_events
// ---------------------------------------------------------------------------

/// Read events from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, and otherwise
/// any error from [`parse_events`].
pub fn read_events(path: &Path, config: &ReaderConfig) -> Result<Vec<Event>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let events = parse_events(BufReader::new(file), config)?;
    info!(path = %path.display(), n_events = events.len(), "read events");
    Ok(events)
}

/// Parse events from CSV text.
///
/// The first record is the header. Fields are trimmed and blank or
/// whitespace-only lines are skipped. Every remaining record must yield a
/// valid [`Event`]; all failing records are reported together, each prefixed
/// with its line number.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for an invalid configuration or invalid
/// records, [`IoError::MissingColumns`] if the header lacks a configured
/// column, or [`IoError::Csv`] if the input is not decodable CSV.
pub fn parse_events<R: Read>(reader: R, config: &ReaderConfig) -> Result<Vec<Event>, IoError> {
    config.validate()?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let [start_idx, end_idx, label_idx] = locate_columns(
        &headers,
        [
            config.start_column.as_str(),
            config.end_column.as_str(),
            config.label_column.as_str(),
        ],
    )?;
    debug!(start_idx, end_idx, label_idx, "located event columns");

    let mut events = Vec::new();
    let mut c = ValidationCollector::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Whitespace-only line; rows with delimiters are validated.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        // Header is line 1.
        let line = record.position().map_or(i as u64 + 2, |p| p.line());

        let start = parse_date_field(&record, start_idx, &config.start_column, config);
        let end = parse_date_field(&record, end_idx, &config.end_column, config);
        let label = record
            .get(label_idx)
            .ok_or_else(|| format!("missing field '{}'", config.label_column));

        match (start, end, label) {
            (Ok(start), Ok(end), Ok(label)) => match Event::new(start, end, label) {
                Ok(event) => events.push(event),
                Err(e) => c.push(format!("line {line}: {e}")),
            },
            (start, end, label) => {
                for msg in [start.err(), end.err(), label.err()].into_iter().flatten() {
                    c.push(format!("line {line}: {msg}"));
                }
            }
        }
    }
    c.finish()?;

    if events.is_empty() {
        warn!("no events found, calendars will have no highlights");
    }
    Ok(events)
}

/// Parse one date column of `record`, describing any problem as text.
fn parse_date_field(
    record: &StringRecord,
    idx: usize,
    column: &str,
    config: &ReaderConfig,
) -> Result<Date, String> {
    let text = record
        .get(idx)
        .ok_or_else(|| format!("missing field '{column}'"))?;
    if text.is_empty() {
        return Err(format!("empty field '{column}'"));
    }
    NaiveDate::parse_from_str(text, &config.date_format)
        .map(Date::from)
        .map_err(|e| format!("invalid {column} {text:?}: {e}"))
}
