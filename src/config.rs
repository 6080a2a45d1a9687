use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level summercal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummercalConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Which months to render.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Document presentation.
    #[serde(default)]
    pub document: DocumentToml,

    /// Highlight colors.
    #[serde(default)]
    pub palette: PaletteToml,
}

impl SummercalConfig {
    /// Loads the configuration at `path`.
    ///
    /// When `path` does not exist and `required` is false, the defaults are
    /// returned instead.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() && !required {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_start_column")]
    pub start_column: String,
    #[serde(default = "default_end_column")]
    pub end_column: String,
    #[serde(default = "default_label_column")]
    pub label_column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            start_column: default_start_column(),
            end_column: default_end_column(),
            label_column: default_label_column(),
            delimiter: default_delimiter(),
            date_format: default_date_format(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("events.csv")
}
fn default_output() -> PathBuf {
    PathBuf::from("index.html")
}
fn default_start_column() -> String {
    "start_date".to_string()
}
fn default_end_column() -> String {
    "end_date".to_string()
}
fn default_label_column() -> String {
    "title".to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Year for bare month numbers; unset means every entry needs `YYYY-MM`.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_months")]
    pub months: Vec<MonthToml>,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            year: None,
            months: default_months(),
        }
    }
}

fn default_months() -> Vec<MonthToml> {
    ["2025-06", "2025-07", "2025-08"]
        .into_iter()
        .map(|m| MonthToml::Text(m.to_string()))
        .collect()
}

/// A month entry: either `7` (paired with `calendar.year`) or `"2025-07"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MonthToml {
    Number(u8),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentToml {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub legend: bool,
}

impl Default for DocumentToml {
    fn default() -> Self {
        Self {
            title: default_title(),
            heading: None,
            legend: false,
        }
    }
}

fn default_title() -> String {
    summercal_render::DEFAULT_TITLE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteToml {
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

impl Default for PaletteToml {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

fn default_colors() -> Vec<String> {
    summercal_highlight::DEFAULT_COLORS
        .iter()
        .map(|c| c.to_string())
        .collect()
}
