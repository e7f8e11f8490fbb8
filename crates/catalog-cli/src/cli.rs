//! CLI argument definitions for the catalog import checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-check",
    version,
    about = "Check catalog spreadsheets before import",
    long_about = "Check catalog spreadsheet exports (CSV) before they are imported.\n\n\
                  Reports rule violations, encoding problems and duplicate items, \n\
                  within a file or against the library spreadsheet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormatArg,

    /// Largest CSV file accepted, in bytes (overrides CATALOG_MAX_FILE_SIZE).
    #[arg(long = "max-file-size", value_name = "BYTES", global = true)]
    pub max_file_size: Option<u64>,

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

    /// Allow cell values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a catalog import file.
    Validate(FileArgs),

    /// Compare an import file against the library file.
    Compare(CompareArgs),

    /// Validate a revised export file.
    ValidateRevised(FileArgs),

    /// Find duplicate rows in a revised export file.
    CompareRevised(FileArgs),

    /// Print the rule tables and the expected revised header.
    Rules,
}

#[derive(Parser)]
pub struct FileArgs {
    /// CSV file to check.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// CSV file about to be imported.
    #[arg(value_name = "IMPORT")]
    pub import: Option<PathBuf>,

    /// Library CSV file the import is checked against.
    #[arg(value_name = "LIBRARY")]
    pub library: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
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
