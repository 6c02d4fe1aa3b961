//! CLI argument definitions for abxstat.

use std::path::PathBuf;

use abx_report::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "abxstat",
    version,
    about = "Antibiotic and antibiotic-pair susceptibility statistics",
    long_about = "Compute susceptibility percentages with Clopper-Pearson confidence\n\
                  intervals for every antibiotic and every antibiotic pair in a\n\
                  microorganism x antibiotic table of S/I/R results."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a susceptibility table and write reports.
    Analyze(AnalyzeArgs),

    /// Check a susceptibility table without computing statistics.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// CSV file: organism identifiers in the first column, one antibiotic per
    /// remaining column.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum percent of records tested for an antibiotic to be kept.
    #[arg(long = "threshold", value_name = "PERCENT")]
    pub threshold: Option<f64>,

    /// Confidence level of the intervals, in percent.
    #[arg(long = "confidence", value_name = "PERCENT")]
    pub confidence: Option<f64>,

    /// TOML config file with [analysis] and [output] sections.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for report files (default: <INPUT dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report files to write (default: both).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Compute and print results without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Only print the first N rows of each summary table.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Json,
    Both,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Csv => Self::Csv,
            OutputFormatArg::Json => Self::Json,
            OutputFormatArg::Both => Self::Both,
        }
    }
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
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_flags() {
        let cli = Cli::try_parse_from([
            "abxstat",
            "analyze",
            "isolates.csv",
            "--threshold",
            "50",
            "--confidence",
            "99",
            "--format",
            "json",
            "--dry-run",
            "--top",
            "5",
        ])
        .unwrap();
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.input, PathBuf::from("isolates.csv"));
        assert_eq!(args.threshold, Some(50.0));
        assert_eq!(args.confidence, Some(99.0));
        assert!(matches!(args.format, Some(OutputFormatArg::Json)));
        assert!(args.dry_run);
        assert_eq!(args.top, Some(5));
    }

    #[test]
    fn global_log_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["abxstat", "validate", "x.csv", "--log-format", "json"])
            .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }
}
