//! CLI argument definitions for the dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use cvd_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "covid-dash",
    version,
    about = "COVID-19 summary dashboard - charts and a marker map for selected countries",
    long_about = "Build the COVID-19 summary dashboard for a set of countries.\n\n\
                  Writes Vega-Lite specs for the bar, scatter and mosaic charts,\n\
                  a Plotly treemap and a marker map description."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: ./covid-dash.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV (overrides the configured path).
    #[arg(long = "dataset", value_name = "CSV", global = true)]
    pub dataset: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the countries and columns of the dataset.
    Countries,

    /// Render the dashboard for a selection of countries.
    Render(RenderArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Country to include; repeat for more. Defaults to the configured set.
    #[arg(long = "country", value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Output directory for the generated specs.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the tables without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
