//! CLI argument definitions for the bloodwork normalizer.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bloodwork",
    version,
    about = "Normalize lab report JSON into canonical metric readings",
    long_about = "Normalize per-lab JSON blood panels into canonical metric readings.\n\n\
                  Validates report shape, reconciles vendor test names, parses censored\n\
                  results and reference ranges, and flags High/Low/Normal values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow lab values in trace logs. They are redacted otherwise.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// TOML file with extra `[aliases]`, `[categories]` and `[descriptions]`.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize report files and print the readings.
    Parse(ParseArgs),

    /// List canonical metrics with their ids and aliases.
    Aliases,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Report files or directories of `.json` reports.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Match author flags case-insensitively and ignore unknown ones.
    ///
    /// By default an author flag outside High/Low/H/L rejects the report.
    #[arg(long = "lenient-flags")]
    pub lenient_flags: bool,

    /// Keep readings collected on or after this date (YYYY-MM-DD).
    #[arg(long = "since", value_name = "DATE")]
    pub since: Option<NaiveDate>,

    /// Keep readings collected on or before this date (YYYY-MM-DD).
    #[arg(long = "until", value_name = "DATE")]
    pub until: Option<NaiveDate>,

    /// Keep only the most recent collection date.
    #[arg(long = "latest")]
    pub latest: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
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
