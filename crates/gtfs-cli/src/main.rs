//! GTFS feed validator CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use gtfs_cli::commands::{ValidateOptions, run_validation};
use gtfs_cli::logging::{LogConfig, LogFormat, init_logging};
use gtfs_cli::summary::print_summary;
use gtfs_validate::{RunnerOptions, ValidationReport};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, ReportFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = validate_options_from_cli(&cli);
    let exit_code = match run_validation(&options) {
        Ok(report) => match print_report(&report, cli.format) {
            Ok(()) => i32::from(report.has_errors()),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn print_report(report: &ValidationReport, format: ReportFormatArg) -> anyhow::Result<()> {
    match format {
        ReportFormatArg::Table => print_summary(report),
        ReportFormatArg::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn validate_options_from_cli(cli: &Cli) -> ValidateOptions {
    let runner = cli
        .exclude
        .iter()
        .fold(RunnerOptions::new().with_parallel(cli.parallel), |options, code| {
            options.exclude(*code)
        });
    ValidateOptions {
        feed_dir: cli.feed_dir.clone(),
        today: cli.today,
        runner,
    }
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
