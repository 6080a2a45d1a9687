//! HTML serialization of month grids.

use summercal_calendar::MonthSpec;
use summercal_highlight::{ColorMap, HighlightMap};

use crate::error::RenderError;
use crate::grid::{Cell, MonthGrid, build_month};

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Appends the `<table>` markup for `grid` to `out`.
pub fn write_month(out: &mut String, grid: &MonthGrid) {
    out.push_str("<table class=\"calendar\"><caption>");
    out.push_str(&escape_html(&grid.caption));
    out.push_str("</caption><thead><tr>");
    for weekday in grid.header {
        out.push_str(&format!("<th>{weekday}</th>"));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &grid.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            write_cell(out, cell);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_cell(out: &mut String, cell: &Cell) {
    match cell {
        Cell::Empty => out.push_str("<td></td>"),
        Cell::Plain { day } => {
            out.push_str(&format!("<td>{day}</td>"));
        }
        Cell::Highlighted { day, label, color } => {
            let label = escape_html(label);
            out.push_str(&format!(
                "<td style=\"background-color:{}\" title=\"{label}\"><strong>{day}</strong><br><small>{label}</small></td>",
                escape_html(color)
            ));
        }
    }
}

/// Renders one month as a self-contained `<table>` fragment.
///
/// # Errors
///
/// Returns [`RenderError::MissingColor`] if a highlighted day's label has no
/// color.
pub fn render_month(
    spec: MonthSpec,
    highlights: &HighlightMap,
    colors: &ColorMap,
) -> Result<String, RenderError> {
    let grid = build_month(spec, highlights, colors)?;
    let mut out = String::new();
    write_month(&mut out, &grid);
    Ok(out)
}
