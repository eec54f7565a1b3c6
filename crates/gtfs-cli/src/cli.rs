//! CLI argument definitions for the GTFS validator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use gtfs_model::NoticeCode;

#[derive(Parser)]
#[command(
    name = "gtfs-validator",
    version,
    about = "Validate a GTFS feed against the bundled rule catalog"
)]
pub struct Cli {
    /// Directory containing the unzipped feed files.
    #[arg(value_name = "FEED_DIR")]
    pub feed_dir: PathBuf,

    /// Reference date for date-relative rules (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Run rules concurrently.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Skip the rule with this code (repeatable).
    #[arg(long = "exclude", value_name = "CODE")]
    pub exclude: Vec<NoticeCode>,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
