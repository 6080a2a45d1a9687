//! Expansion of events into a per-day highlight lookup.

use std::collections::BTreeMap;

use summercal_calendar::{Date, MonthSpec};
use tracing::{debug, trace};

use crate::event::Event;

/// Per-day lookup from calendar date to the label covering it.
///
/// Iteration is chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    days: BTreeMap<Date, String>,
}

impl HighlightMap {
    /// Label covering `date`, if any.
    pub fn get(&self, date: Date) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    /// Number of highlighted days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no day is highlighted.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates `(date, label)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> {
        self.days.iter().map(|(d, l)| (*d, l.as_str()))
    }

    /// Distinct labels that survive in the map, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.days.values().map(String::as_str).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Number of highlighted days inside `spec`.
    pub fn days_in_month(&self, spec: MonthSpec) -> usize {
        self.days
            .range(spec.first_day()..=spec.last_day())
            .count()
    }
}

/// Expands `events` into a [`HighlightMap`].
///
/// Every day of every event is assigned that event's label. Events are
/// applied in input order, so where ranges overlap the later event's label
/// wins. Use [`find_overlaps`] to report such collisions.
pub fn expand(events: &[Event]) -> HighlightMap {
    let mut days = BTreeMap::new();
    for event in events {
        trace!(event = %event, n_days = event.n_days(), "expanding event");
        for day in event.days() {
            if let Some(previous) = days.insert(day, event.label().to_string())
                && previous != event.label()
            {
                debug!(
                    date = %day,
                    previous = %previous,
                    label = event.label(),
                    "overlapping event replaces label"
                );
            }
        }
    }
    debug!(
        n_events = events.len(),
        n_days = days.len(),
        "expanded events"
    );
    HighlightMap { days }
}

/// Two events whose date ranges intersect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    /// Input index of the earlier event.
    pub first: usize,
    /// Input index of the later event, whose label wins on shared days.
    pub second: usize,
    /// First shared day.
    pub start: Date,
    /// Last shared day.
    pub end: Date,
}

impl Overlap {
    /// Number of shared days.
    pub fn n_days(&self) -> usize {
        (self.start.days_until(self.end) + 1) as usize
    }
}

/// Reports every pair of events whose ranges share at least one day.
///
/// Pairs are ordered by `(first, second)` input index. The result is
/// independent of labels: two events with the same label still overlap.
pub fn find_overlaps(events: &[Event]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();
    for (i, a) in events.iter().enumerate() {
        for (j, b) in events.iter().enumerate().skip(i + 1) {
            let start = a.start().max(b.start());
            let end = a.end().min(b.end());
            if start <= end {
                overlaps.push(Overlap {
                    first: i,
                    second: j,
                    start,
                    end,
                });
            }
        }
    }
    overlaps
}
