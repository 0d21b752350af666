//! CLI argument definitions for the CSV table loader.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser, Debug)]
#[command(
    name = "csvload",
    version,
    about = "Load a CSV table export into a destination store",
    long_about = "Load a CSV table export into a destination store.\n\n\
                  Takes the CSV data, an XML table schema (the output of\n\
                  `mysql --xml -e \"describe <table>;\"`), and a JSON mapping of\n\
                  source columns to destination columns. All three inputs are\n\
                  validated before any row is written."
)]
pub struct Cli {
    /// CSV data file to load.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// XML table schema produced by a `describe` statement.
    #[arg(value_name = "TABLE_SCHEMA")]
    pub table_schema: PathBuf,

    /// JSON mapping of source columns to destination columns.
    #[arg(value_name = "MAPPING")]
    pub mapping: PathBuf,

    /// Write mapped rows as JSON lines to PATH (default: validate and count only).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail when the mapping names a column absent from the schema.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
