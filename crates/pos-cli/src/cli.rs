//! CLI argument definitions for the POS transaction normalizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pos-etl",
    version,
    about = "POS Transaction Normalizer - Convert point-of-sale exports to structured records",
    long_about = "Convert point-of-sale transaction exports to normalized JSON records.\n\n\
                  Parses the flat \"Orders\" token stream into structured baskets\n\
                  (name, flavour, size, price, iced) and cleans payment fields."
)]
pub struct Cli {
    /// Path to the transaction CSV export.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output JSON file (default: print to stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Abort on the first malformed row instead of skipping it.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Parse and report without writing output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
