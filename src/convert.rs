//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use summercal_calendar::MonthSpec;
use summercal_highlight::Palette;
use summercal_io::ReaderConfig;
use summercal_render::DocumentOptions;

use crate::config::*;

/// Parses a delimiter setting: a single ASCII character, or `"tab"`.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "tab" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = s.as_bytes();
            if bytes.len() != 1 || !bytes[0].is_ascii() {
                bail!("delimiter must be a single ASCII character or \"tab\", got {s:?}");
            }
            Ok(bytes[0])
        }
    }
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_start_column(&io.start_column)
        .with_end_column(&io.end_column)
        .with_label_column(&io.label_column)
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_date_format(&io.date_format);
    cfg.validate()?;
    Ok(cfg)
}

/// Resolves one month entry against the default `year`.
///
/// Bare numbers (`7` or `"7"`) need `year`; `"YYYY-MM"` strings carry their
/// own year.
pub fn resolve_month(entry: &MonthToml, year: Option<i32>) -> Result<MonthSpec> {
    let spec = match entry {
        MonthToml::Number(month) => month_in_year(*month, year)?,
        MonthToml::Text(text) => match text.trim().parse::<u8>() {
            Ok(month) => month_in_year(month, year)?,
            Err(_) => text
                .parse::<MonthSpec>()
                .with_context(|| format!("invalid month entry {text:?}"))?,
        },
    };
    if spec.year() <= 0 {
        bail!("year must be positive, got {} in {spec}", spec.year());
    }
    Ok(spec)
}

fn month_in_year(month: u8, year: Option<i32>) -> Result<MonthSpec> {
    let Some(year) = year else {
        bail!("month {month} has no year: set [calendar].year or use YYYY-MM");
    };
    MonthSpec::new(year, month).with_context(|| format!("invalid month {month} for year {year}"))
}

/// Resolves the ordered list of months to render.
///
/// Order is preserved exactly; duplicates are kept.
pub fn build_months(entries: &[MonthToml], year: Option<i32>) -> Result<Vec<MonthSpec>> {
    if entries.is_empty() {
        bail!("no months to render: set [calendar].months or pass --month");
    }
    entries.iter().map(|e| resolve_month(e, year)).collect()
}

/// Builds the highlight [`Palette`] from the TOML palette section.
pub fn build_palette(palette: &PaletteToml) -> Result<Palette> {
    if let Some(blank) = palette.colors.iter().position(|c| c.trim().is_empty()) {
        bail!("palette color {blank} is empty");
    }
    Palette::new(palette.colors.iter().map(|c| c.trim().to_string()))
        .context("invalid [palette].colors")
}

/// Builds [`DocumentOptions`] from the TOML document section.
pub fn build_document_options(doc: &DocumentToml) -> DocumentOptions {
    DocumentOptions::default()
        .with_title(&doc.title)
        .with_heading(doc.heading.as_deref())
        .with_legend(doc.legend)
}
