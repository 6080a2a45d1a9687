//! Deterministic label colors.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::EventError;
use crate::event::Event;

/// Default highlight colors, in assignment order.
pub const DEFAULT_COLORS: [&str; 6] = [
    "#ffd966", "#a4c2f4", "#d9ead3", "#f4cccc", "#cfe2f3", "#f9cb9c",
];

/// An ordered, non-empty list of CSS colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Creates a palette from `colors`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::EmptyPalette`] if `colors` is empty.
    pub fn new<I, S>(colors: I) -> Result<Self, EventError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(EventError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the label at sorted position `rank`.
    ///
    /// Ranks past the end wrap around, so labels beyond the palette size
    /// share colors with earlier ones.
    pub fn color_for_rank(&self, rank: usize) -> &str {
        &self.colors[rank % self.colors.len()]
    }

    /// The colors in order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

/// Mapping from each distinct label to its display color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: BTreeMap<String, String>,
}

impl ColorMap {
    /// Color assigned to `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.colors.get(label).map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no labels are mapped.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates `(label, color)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(l, c)| (l.as_str(), c.as_str()))
    }
}

/// Assigns a palette color to every distinct label in `events`.
///
/// Labels are compared exactly (case-sensitive) and sorted lexicographically;
/// the label at rank `i` gets `palette[i % palette.len()]`. The result
/// depends only on the set of labels, never on event order.
pub fn assign_colors(events: &[Event], palette: &Palette) -> ColorMap {
    let labels: BTreeSet<&str> = events.iter().map(Event::label).collect();
    if labels.len() > palette.len() {
        warn!(
            n_labels = labels.len(),
            n_colors = palette.len(),
            "more labels than palette colors, colors will repeat"
        );
    }
    let colors: BTreeMap<String, String> = labels
        .into_iter()
        .enumerate()
        .map(|(rank, label)| (label.to_string(), palette.color_for_rank(rank).to_string()))
        .collect();
    debug!(n_labels = colors.len(), "assigned label colors");
    ColorMap { colors }
}
