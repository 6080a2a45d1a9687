//! Structured month grid.
//!
//! A [`MonthGrid`] is built once from the highlight and color lookups and
//! then serialized; the seven-cell row shape is carried by the types.

use summercal_calendar::{Date, MonthSpec, WEEKDAYS, Weekday, month_layout};
use summercal_highlight::{ColorMap, HighlightMap};
use tracing::trace;

use crate::error::RenderError;

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Placeholder before the 1st or after the last day of the month.
    Empty,
    /// An in-month day with no event.
    Plain {
        /// Day of the month.
        day: u8,
    },
    /// An in-month day covered by an event.
    Highlighted {
        /// Day of the month.
        day: u8,
        /// Label of the covering event.
        label: String,
        /// Background color assigned to the label.
        color: String,
    },
}

impl Cell {
    /// Day of the month, or `None` for placeholders.
    pub fn day(&self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Plain { day } | Cell::Highlighted { day, .. } => Some(*day),
        }
    }

    /// Returns `true` for highlighted cells.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, Cell::Highlighted { .. })
    }
}

/// One Monday-first week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    /// Cells, Monday first.
    pub cells: [Cell; 7],
}

/// A month ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// The month this grid shows.
    pub spec: MonthSpec,
    /// Caption text, e.g. `"July 2025"`.
    pub caption: String,
    /// Column headers, Monday first.
    pub header: [Weekday; 7],
    /// Week rows, first to last.
    pub rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Number of highlighted cells.
    pub fn n_highlighted(&self) -> usize {
        self.cells().filter(|c| c.is_highlighted()).count()
    }
}

/// Builds the grid for `spec`.
///
/// # Errors
///
/// Returns [`RenderError::MissingColor`] if a highlighted day's label is not
/// in `colors`.
pub fn build_month(
    spec: MonthSpec,
    highlights: &HighlightMap,
    colors: &ColorMap,
) -> Result<MonthGrid, RenderError> {
    let rows = month_layout(spec)
        .into_iter()
        .map(|week| -> Result<WeekRow, RenderError> {
            let mut cells: [Cell; 7] = std::array::from_fn(|_| Cell::Empty);
            for (cell, date) in cells.iter_mut().zip(week) {
                if let Some(date) = date {
                    *cell = build_cell(date, highlights, colors)?;
                }
            }
            Ok(WeekRow { cells })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let grid = MonthGrid {
        spec,
        caption: format!("{} {}", spec.name(), spec.year()),
        header: WEEKDAYS,
        rows,
    };
    trace!(
        month = %spec,
        n_rows = grid.rows.len(),
        n_highlighted = grid.n_highlighted(),
        "built month grid"
    );
    Ok(grid)
}

fn build_cell(
    date: Date,
    highlights: &HighlightMap,
    colors: &ColorMap,
) -> Result<Cell, RenderError> {
    let day = date.day();
    let Some(label) = highlights.get(date) else {
        return Ok(Cell::Plain { day });
    };
    let color = colors.get(label).ok_or_else(|| RenderError::MissingColor {
        label: label.to_string(),
        date,
    })?;
    Ok(Cell::Highlighted {
        day,
        label: label.to_string(),
        color: color.to_string(),
    })
}
