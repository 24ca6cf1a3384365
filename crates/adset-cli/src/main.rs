//! Adset sales report CLI.

use std::io::{self, IsTerminal};

use adset_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_aliases, run_inspect, run_summarize};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Summarize(args) => match run_summarize(args) {
            Ok(result) => {
                for error in &result.errors {
                    eprintln!("error: {error}");
                }
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inspect(args) => match run_inspect(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Aliases => match run_aliases() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
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
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config = config
        .with_format(format)
        .with_log_file(cli.log_file.clone())
        .with_timestamps(cli.log_timestamps);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::parse_from(std::iter::once("adset-report").chain(args.iter().copied()));
        log_config_from_cli(&cli)
    }

    #[test]
    fn timestamps_follow_flag() {
        assert!(!config_for(&["aliases"]).with_timestamps);
        assert!(config_for(&["aliases", "--log-timestamps"]).with_timestamps);
    }

    #[test]
    fn explicit_level_disables_env_filter() {
        let config = config_for(&["--log-level", "debug", "aliases"]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config_for(&["aliases"]).use_env_filter);
    }

    #[test]
    fn log_file_disables_auto_ansi() {
        let config = config_for(&["--log-file", "run.log", "--log-format", "compact", "aliases"]);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.log_file, Some("run.log".into()));
        assert!(!config.with_ansi);
    }
}
