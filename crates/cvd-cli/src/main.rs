//! COVID-19 summary dashboard CLI.

use clap::{ColorChoice, Parser};
use cvd_cli::config::DashboardConfig;
use cvd_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command};
use crate::commands::{run_countries, run_render};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let exit_code = match &cli.command {
        Command::Countries => match run_countries(&config) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Render(args) => match run_render(args, &config) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Config file first, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut config = DashboardConfig::resolve(cli.config.as_deref(), &working_dir)?;
    if let Some(path) = &cli.dataset {
        config.dataset.path = path.clone();
    }
    Ok(config)
}

/// Logging setup from the global flags. An explicit `--log-level` beats
/// `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        with_ansi,
        format: cli.log_format.into(),
        log_file: cli.log_file.clone(),
    }
}
