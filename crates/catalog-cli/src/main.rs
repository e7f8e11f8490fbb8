//! Catalog import checker CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use catalog_cli::commands::{run_compare, run_compare_revised, run_validate, run_validate_revised};
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_cli::summary::{TableStyling, render_json, render_rules, render_summary};
use catalog_cli::types::CheckResult;
use catalog_ingest::IngestOptions;
use catalog_validate::Validator;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let validator = Validator::default();
    let styling = table_styling(&cli);
    let exit_code = if matches!(cli.command, Command::Rules) {
        println!("{}", render_rules(validator.config(), styling));
        0
    } else {
        match run_check(&cli, &validator) {
            Ok(result) => match print_result(&result, cli.format, styling) {
                Ok(()) => i32::from(result.has_errors()),
                Err(error) => {
                    eprintln!("error: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        }
    };
    std::process::exit(exit_code);
}

fn run_check(cli: &Cli, validator: &Validator) -> anyhow::Result<CheckResult> {
    let options = ingest_options(cli);
    match &cli.command {
        Command::Validate(args) => run_validate(validator, args.file.as_deref(), &options),
        Command::Compare(args) => run_compare(
            validator,
            args.import.as_deref(),
            args.library.as_deref(),
            &options,
        ),
        Command::ValidateRevised(args) => {
            run_validate_revised(validator, args.file.as_deref(), &options)
        }
        Command::CompareRevised(args) => {
            run_compare_revised(validator, args.file.as_deref(), &options)
        }
        Command::Rules => anyhow::bail!("rules is not a file check"),
    }
}

fn print_result(
    result: &CheckResult,
    format: OutputFormatArg,
    styling: TableStyling,
) -> serde_json::Result<()> {
    match format {
        OutputFormatArg::Text => println!("{}", render_summary(result, styling)),
        OutputFormatArg::Json => println!("{}", render_json(result)?),
    }
    Ok(())
}

/// Environment first, then the command-line override.
fn ingest_options(cli: &Cli) -> IngestOptions {
    let options = IngestOptions::from_env();
    match cli.max_file_size {
        Some(max_file_size) => options.with_max_file_size(max_file_size),
        None => options,
    }
}

fn table_styling(cli: &Cli) -> TableStyling {
    match cli.color.color {
        ColorChoice::Always => TableStyling::Always,
        ColorChoice::Never => TableStyling::Never,
        ColorChoice::Auto => TableStyling::Auto,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };

    let mut config = LogConfig::default()
        .with_level_filter(level_filter)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("catalog-check").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_explicit_level_disables_env_filter() {
        let cli = parse(&["--log-level", "debug", "--log-data", "--color", "never", "rules"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config.log_data);
        assert!(!config.with_ansi);
    }

    #[test]
    fn test_defaults_follow_rust_log() {
        let cli = parse(&["--log-format", "json", "--log-file", "checks.log", "rules"]);
        let config = log_config_from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(std::path::PathBuf::from("checks.log")));
        assert!(!config.log_data);
    }

    #[test]
    fn test_verbosity_flag() {
        let config = log_config_from_cli(&parse(&["-v", "rules"]));
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);
    }
}
