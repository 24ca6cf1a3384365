//! CLI argument definitions for the adset sales report.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use adset_ingest::SourceEncoding;

#[derive(Parser)]
#[command(
    name = "adset-report",
    version,
    about = "Adset sales report - Summarize leads and sales per adset",
    long_about = "Summarize a semicolon-delimited lead export per adset.\n\n\
                  Reports leads, sales and revenue per product category (planejamento,\n\
                  seguros, credito), average ticket, and conversion rate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize leads and sales per adset.
    Summarize(SummarizeArgs),

    /// List the header columns of a lead export.
    Inspect(InspectArgs),

    /// List the column names accepted for each field.
    Aliases,
}

#[derive(Parser)]
pub struct SummarizeArgs {
    /// Path to the semicolon-delimited lead export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the semicolon-delimited lead export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub encoding: EncodingArgs,
}

#[derive(Parser)]
pub struct EncodingArgs {
    /// Encoding to try, in order (repeatable). Replaces the default
    /// utf-8, latin-1, cp1252, iso-8859-1 sequence.
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encodings: Vec<SourceEncoding>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_encodings() {
        let cli = Cli::parse_from([
            "adset-report",
            "summarize",
            "leads.csv",
            "--encoding",
            "latin1",
            "--encoding",
            "utf-8",
        ]);
        let Command::Summarize(args) = cli.command else {
            panic!("expected summarize");
        };
        assert_eq!(
            args.encoding.encodings,
            vec![SourceEncoding::Latin1, SourceEncoding::Utf8]
        );
    }

    #[test]
    fn rejects_unknown_encoding() {
        let result = Cli::try_parse_from([
            "adset-report",
            "inspect",
            "leads.csv",
            "--encoding",
            "klingon",
        ]);
        assert!(result.is_err());
    }
}
