use std::path::Path;

use anyhow::{Context, Result};
use tracing::info_span;

use summercal_calendar::MonthSpec;
use summercal_highlight::{Event, Palette, assign_colors, expand, find_overlaps};
use summercal_io::read_events;

use crate::cli::{CheckArgs, DEFAULT_CONFIG};
use crate::config::SummercalConfig;
use crate::convert;

/// Run the `check` subcommand.
pub fn run(args: CheckArgs) -> Result<()> {
    let _span = info_span!("check").entered();

    let config_path = args.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG));
    let mut config = SummercalConfig::load(config_path, args.config.is_some())?;
    if let Some(input) = args.input {
        config.io.input = input;
    }

    let reader_cfg = convert::build_reader_config(&config.io)?;
    let palette = convert::build_palette(&config.palette)?;
    let months = convert::build_months(&config.calendar.months, config.calendar.year)?;
    let input = &config.io.input;
    let events = read_events(input, &reader_cfg)
        .with_context(|| format!("failed to read events: {}", input.display()))?;

    print!("{}", summarize(&events, &palette, &months));
    Ok(())
}

/// Human-readable report of events, label colors, per-month coverage, and
/// overlapping ranges.
pub fn summarize(events: &[Event], palette: &Palette, months: &[MonthSpec]) -> String {
    let highlights = expand(events);
    let colors = assign_colors(events, palette);
    let overlaps = find_overlaps(events);
    let visible = highlights.labels();

    let mut out = String::new();
    out.push_str(&format!("events: {}\n", events.len()));
    out.push_str(&format!("highlighted days: {}\n", highlights.len()));
    out.push_str(&format!("labels: {}\n", colors.len()));
    for (label, color) in colors.iter() {
        let hidden = if visible.iter().any(|v| *v == label) {
            ""
        } else {
            "  (hidden by later events)"
        };
        out.push_str(&format!("  {color}  {label}{hidden}\n"));
    }
    out.push_str(&format!("months: {}\n", months.len()));
    for &spec in months {
        out.push_str(&format!(
            "  {spec}: {} of {} day(s) highlighted\n",
            highlights.days_in_month(spec),
            spec.n_days()
        ));
    }
    out.push_str(&format!("overlaps: {}\n", overlaps.len()));
    for overlap in &overlaps {
        let first = &events[overlap.first];
        let second = &events[overlap.second];
        out.push_str(&format!(
            "  {first} and {second} share {} day(s), {}..={}; {:?} is shown\n",
            overlap.n_days(),
            overlap.start,
            overlap.end,
            second.label(),
        ));
    }
    out
}
