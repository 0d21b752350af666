//! CSV table loader CLI.

use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use csvload_cli::cli::{Cli, LogFormatArg};
use csvload_cli::commands::run_import;
use csvload_cli::exit;
use csvload_cli::logging::{LogConfig, LogFormat, init_logging};
use csvload_cli::summary::print_summary;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // clap's rendering includes the usage text; help and version
            // requests are not failures.
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => exit::USAGE,
            };
            let _ = error.print();
            std::process::exit(code);
        }
    };
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    match run_import(&cli) {
        Ok(outcome) => print_summary(&outcome),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(exit::exit_code_for(&error));
        }
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_target: false,
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        log_file: cli.log_file.clone(),
    }
}
