use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use summercal_highlight::{assign_colors, expand};
use summercal_io::{read_events, write_document, write_document_to};
use summercal_render::compose;

use crate::cli::{DEFAULT_CONFIG, GenerateArgs};
use crate::config::{MonthToml, SummercalConfig};
use crate::convert;

/// Output path that selects stdout.
const STDOUT: &str = "-";

/// Run the `generate` subcommand.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _span = info_span!("generate").entered();

    let config_path = args.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG));
    let mut config = SummercalConfig::load(config_path, args.config.is_some())?;
    apply_overrides(&mut config, args);

    let document = render(&config)?;

    let output = &config.io.output;
    if output.as_os_str() == STDOUT {
        write_document_to(std::io::stdout().lock(), &document)
            .context("failed to write document to stdout")?;
    } else {
        write_document(output, &document)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!(path = %output.display(), "calendar written");
    }
    Ok(())
}

/// Apply CLI overrides on top of the loaded configuration.
///
/// `--month` entries replace the configured month list entirely.
pub fn apply_overrides(config: &mut SummercalConfig, args: GenerateArgs) {
    if let Some(input) = args.input {
        config.io.input = input;
    }
    if let Some(output) = args.output {
        config.io.output = output;
    }
    if let Some(year) = args.year {
        config.calendar.year = Some(year);
    }
    if !args.months.is_empty() {
        config.calendar.months = args.months.into_iter().map(MonthToml::Text).collect();
    }
    if let Some(title) = args.title {
        config.document.title = title;
    }
    if args.legend {
        config.document.legend = true;
    }
}

/// Read events and render the complete calendar document.
pub fn render(config: &SummercalConfig) -> Result<String> {
    // Resolve everything from config before touching the input file.
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let months = convert::build_months(&config.calendar.months, config.calendar.year)?;
    let palette = convert::build_palette(&config.palette)?;
    let options = convert::build_document_options(&config.document);

    let input = &config.io.input;
    let events = read_events(input, &reader_cfg)
        .with_context(|| format!("failed to read events: {}", input.display()))?;

    let highlights = expand(&events);
    let colors = assign_colors(&events, &palette);
    info!(
        n_events = events.len(),
        n_days = highlights.len(),
        n_labels = colors.len(),
        n_months = months.len(),
        "rendering calendar"
    );

    compose(&months, &highlights, &colors, &options).context("failed to render calendar")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            config: None,
            input: None,
            output: None,
            year: None,
            months: Vec::new(),
            title: None,
            legend: false,
        }
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = SummercalConfig::default();
        let overrides = GenerateArgs {
            input: Some(PathBuf::from("in.csv")),
            output: Some(PathBuf::from("-")),
            year: Some(2030),
            months: vec!["1".into(), "2031-02".into()],
            title: Some("Trips".into()),
            legend: true,
            ..args()
        };
        apply_overrides(&mut config, overrides);
        assert_eq!(config.io.input, PathBuf::from("in.csv"));
        assert_eq!(config.io.output, PathBuf::from("-"));
        assert_eq!(config.calendar.year, Some(2030));
        assert_eq!(
            config.calendar.months,
            vec![
                MonthToml::Text("1".into()),
                MonthToml::Text("2031-02".into())
            ]
        );
        assert_eq!(config.document.title, "Trips");
        assert!(config.document.legend);
    }

    #[test]
    fn no_overrides_keep_config() {
        let mut config = SummercalConfig::default();
        apply_overrides(&mut config, args());
        assert_eq!(config.calendar.months.len(), 3);
        assert!(!config.document.legend);
    }

    #[test]
    fn render_default_summer() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("events.csv");
        fs::write(
            &input,
            "start_date,end_date,title\n2025-07-04,2025-07-04,Independence Day\n",
        )
        .unwrap();

        let mut config = SummercalConfig::default();
        config.io.input = input;
        let html = render(&config).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<table class=\"calendar\">").count(), 3);
        assert!(html.contains("<caption>June 2025</caption>"));
        assert!(html.contains("<caption>August 2025</caption>"));
        assert!(html.contains(
            "<td style=\"background-color:#ffd966\" title=\"Independence Day\">\
             <strong>4</strong><br><small>Independence Day</small></td>"
        ));
    }

    #[test]
    fn render_missing_input_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = SummercalConfig::default();
        config.io.input = dir.path().join("absent.csv");
        let err = render(&config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read events"));
    }

    #[test]
    fn bad_month_fails_before_reading_input() {
        let mut config = SummercalConfig::default();
        config.io.input = PathBuf::from("/nonexistent/events.csv");
        config.calendar.year = Some(2025);
        config.calendar.months = vec![MonthToml::Number(13)];
        let err = render(&config).unwrap_err();
        assert!(format!("{err:#}").contains("invalid month"));
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("events.csv");
        let output = dir.path().join("site").join("index.html");
        fs::write(
            &input,
            "start_date,end_date,title\n2025-12-30,2026-01-02,New Year\n",
        )
        .unwrap();
        let config_path = dir.path().join("summercal.toml");
        fs::write(&config_path, "[calendar]\nmonths = [\"2025-12\", \"2026-01\"]\n").unwrap();

        let run_args = GenerateArgs {
            config: Some(config_path),
            input: Some(input),
            output: Some(output.clone()),
            ..args()
        };
        run(run_args).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        let december = html.find("December 2025").unwrap();
        let january = html.find("January 2026").unwrap();
        assert!(december < january);
        assert_eq!(html.matches("<small>New Year</small>").count(), 4);
    }

    #[test]
    fn run_with_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let run_args = GenerateArgs {
            config: Some(dir.path().join("missing.toml")),
            ..args()
        };
        assert!(run(run_args).is_err());
    }
}
