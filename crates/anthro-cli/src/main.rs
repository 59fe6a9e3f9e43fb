//! WHO growth z-score CLI.

use std::io::{self, IsTerminal};

use anthro_cli::config::{apply_overrides, load_options};
use anthro_cli::logging::{LogConfig, LogFormat, init_logging};
use anthro_model::EngineOptions;
use clap::{ColorChoice, Parser};
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_batch, run_curve, run_evaluate, run_tables};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Command::Evaluate(args) => {
            run_evaluate(args, engine_options(cli)?)?;
            Ok(0)
        }
        Command::Batch(args) => {
            let report = run_batch(args, engine_options(cli)?)?;
            Ok(if report.has_failures() { 1 } else { 0 })
        }
        Command::Tables => run_tables().map(|()| 0),
        Command::Curve(args) => run_curve(args).map(|()| 0),
    }
}

fn engine_options(cli: &Cli) -> anyhow::Result<EngineOptions> {
    let options = load_options(cli.config.as_deref())?;
    Ok(apply_overrides(options, cli.fractional_age))
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
