//! Cost Tree CLI
//!
//! Renders cost-breakdown trees from flat path -> cost documents.

use anyhow::Result;
use clap::{Parser, Subcommand};
use cost_tree::aggregator::SortKey;
use cost_tree::commands::{
    display_schema, display_version, execute_render, validate_data_file, OutputFormat, RenderArgs,
};
use cost_tree::formatter::TimeUnit;
use cost_tree::parser::Mode;
use env_logger::Env;
use std::path::PathBuf;

/// Cost Tree - hierarchical cost breakdowns from flat cost maps
#[derive(Parser, Debug)]
#[command(name = "cost-tree")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a cost data document and render its tree
    Render {
        /// Cost data document (JSON with `init` and `late` maps)
        #[arg(short, long)]
        input: PathBuf,

        /// Breakdown mode: init or late
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Sibling ranking: total or avg
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Display unit: ds, ms, s or µs (anything else shows raw deciseconds)
        #[arg(short, long)]
        unit: Option<TimeUnit>,

        /// Show raw floating values instead of truncated integers
        #[arg(long)]
        raw_numbers: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Deepest tree level to print in text output (0 = top level)
        #[arg(long)]
        max_depth: Option<usize>,

        /// View defaults file (TOML)
        #[arg(short, long, env = "COST_TREE_CONFIG")]
        config: Option<PathBuf>,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Validate a cost data document
    Validate {
        /// Path to cost data JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Render {
            input,
            mode,
            sort,
            unit,
            raw_numbers,
            format,
            output,
            max_depth,
            config,
            no_color,
        } => {
            let args = RenderArgs {
                input,
                config,
                mode,
                sort,
                time_unit: unit,
                raw_numbers,
                format,
                output,
                max_depth,
                color: !no_color,
            };

            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_data_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
