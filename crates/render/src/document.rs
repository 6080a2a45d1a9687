//! Full HTML document composition.

use summercal_calendar::MonthSpec;
use summercal_highlight::{ColorMap, HighlightMap};
use tracing::debug;

use crate::error::RenderError;
use crate::grid::build_month;
use crate::html::{escape_html, write_month};

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            padding: 20px;
        }
        h1 {
            margin-bottom: 30px;
        }
        .calendar {
            border-collapse: collapse;
            margin-bottom: 40px;
            width: 100%;
        }
        .calendar caption {
            font-size: 1.6em;
            margin-bottom: 10px;
            font-weight: bold;
        }
        .calendar th, .calendar td {
            border: 1px solid #999;
            padding: 8px;
            text-align: center;
            vertical-align: top;
            width: 14.28%;
            height: 80px;
        }
        .calendar small {
            font-size: 0.75em;
        }
        .legend {
            list-style: none;
            padding: 0;
            margin-bottom: 30px;
        }
        .legend li {
            display: inline-block;
            margin-right: 16px;
        }
        .legend span {
            display: inline-block;
            width: 14px;
            height: 14px;
            margin-right: 6px;
            border: 1px solid #999;
            vertical-align: middle;
        }
"#;

/// Default document title.
pub const DEFAULT_TITLE: &str = "Event Calendar";

/// Presentation options for [`compose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    title: String,
    heading: Option<String>,
    legend: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: None,
            legend: false,
        }
    }
}

impl DocumentOptions {
    /// Sets the `<title>` text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the `<h1>` text. Defaults to the title.
    pub fn with_heading(mut self, heading: Option<impl Into<String>>) -> Self {
        self.heading = heading.map(Into::into);
        self
    }

    /// Enables or disables the label legend.
    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// The `<title>` text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The `<h1>` text.
    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.title)
    }

    /// Whether the legend is emitted.
    pub fn legend(&self) -> bool {
        self.legend
    }
}

/// Composes a complete HTML document with one table per month.
///
/// Months appear in the order given; no sorting is applied.
///
/// # Errors
///
/// Returns [`RenderError::NoMonths`] if `months` is empty, or
/// [`RenderError::MissingColor`] if a highlighted label has no color.
pub fn compose(
    months: &[MonthSpec],
    highlights: &HighlightMap,
    colors: &ColorMap,
    options: &DocumentOptions,
) -> Result<String, RenderError> {
    if months.is_empty() {
        return Err(RenderError::NoMonths);
    }

    let grids = months
        .iter()
        .map(|&spec| build_month(spec, highlights, colors))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n    <title>");
    out.push_str(&escape_html(options.title()));
    out.push_str("</title>\n    <style>\n");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n    <h1>");
    out.push_str(&escape_html(options.heading()));
    out.push_str("</h1>\n");

    if options.legend() && !colors.is_empty() {
        write_legend(&mut out, colors);
    }

    for grid in &grids {
        write_month(&mut out, grid);
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");

    debug!(
        n_months = grids.len(),
        n_bytes = out.len(),
        "composed document"
    );
    Ok(out)
}

fn write_legend(out: &mut String, colors: &ColorMap) {
    out.push_str("    <ul class=\"legend\">");
    for (label, color) in colors.iter() {
        out.push_str(&format!(
            "<li><span style=\"background-color:{}\"></span>{}</li>",
            escape_html(color),
            escape_html(label)
        ));
    }
    out.push_str("</ul>\n");
}
