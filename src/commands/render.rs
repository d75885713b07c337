//! Render command implementation.
//!
//! The render command:
//! 1. Resolves view settings (defaults file, then flags)
//! 2. Loads the cost data document
//! 3. Runs one render pass through `ViewState`
//! 4. Prints or writes the text tree or JSON report

use crate::aggregator::SortKey;
use crate::formatter::TimeUnit;
use crate::output::{
    render_text, report_to_string, validate_path, write_report, Report, TextOptions,
};
use crate::parser::{read_cost_data, Mode};
use crate::utils::config::load_view_config;
use crate::view::{ViewSettings, ViewState};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Output format of the render command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Cost data document (JSON)
    pub input: PathBuf,

    /// View defaults file (TOML)
    pub config: Option<PathBuf>,

    // Flag overrides; `None` keeps the file or built-in default
    pub mode: Option<Mode>,
    pub sort: Option<SortKey>,
    pub time_unit: Option<TimeUnit>,
    pub raw_numbers: bool,

    pub format: OutputFormat,

    /// Write here instead of stdout
    pub output: Option<PathBuf>,

    /// Deepest level printed in text output
    pub max_depth: Option<usize>,

    /// Colour text output
    pub color: bool,
}

/// Validate render arguments before touching any data
///
/// **Public** - called by execute_render, exposed for tests
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        bail!("Input file not found: {}", args.input.display());
    }

    if let Some(output) = &args.output {
        validate_path(output).context("Invalid output path")?;
    }

    if args.max_depth.is_some() && args.format == OutputFormat::Json {
        warn!("--max-depth only applies to text output, ignoring it for JSON");
    }

    Ok(())
}

/// Resolve view settings from the defaults file and flag overrides
pub fn build_settings(args: &RenderArgs) -> Result<ViewSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            let config = load_view_config(path)
                .with_context(|| format!("Failed to load view config {}", path.display()))?;
            ViewSettings::from_config(&config).context("Invalid view config")?
        }
        None => ViewSettings::default(),
    };

    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(sort) = args.sort {
        settings.sort = sort;
    }
    if let Some(unit) = &args.time_unit {
        settings.time_unit = unit.clone();
    }
    if args.raw_numbers {
        settings.format.raw_numbers = true;
    }

    debug!("Resolved view settings: {:?}", settings);
    Ok(settings)
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// A `null` document renders nothing and is not an error.
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    validate_args(&args)?;
    let settings = build_settings(&args)?;

    let data = read_cost_data(&args.input)
        .with_context(|| format!("Failed to load cost data from {}", args.input.display()))?;

    let mut view = ViewState::new(data, settings);
    let Some(presentation) = view.render_all() else {
        warn!("Cost data document is empty (null), nothing to render");
        return Ok(());
    };

    info!(
        "Rendered {} nodes ({} top-level)",
        presentation.node_count(),
        presentation.nodes.len()
    );

    let content = match args.format {
        OutputFormat::Text => {
            let options = TextOptions {
                max_depth: args.max_depth,
                color: args.color && args.output.is_none(),
            };
            render_text(presentation, &options)
        }
        OutputFormat::Json => {
            let report = Report::new(presentation.clone());
            if let Some(path) = &args.output {
                write_report(&report, path).context("Failed to write JSON report")?;
                info!("✓ Report written to: {}", path.display());
                log_elapsed(start_time);
                return Ok(());
            }
            report_to_string(&report).context("Failed to serialize JSON report")?
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, content + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("✓ Tree written to: {}", path.display());
        }
        None => println!("{}", content),
    }

    log_elapsed(start_time);
    Ok(())
}

fn log_elapsed(start_time: Instant) {
    debug!("Render completed in {:.3}s", start_time.elapsed().as_secs_f64());
}
