use abx_cli::config::load_config;
use abx_cli::pipeline::{
    self, AnalyzeOutcome, AnalyzeRequest, ValidateOutcome, default_output_dir,
};
use abx_report::OutputFormat;
use anyhow::Result;

use crate::cli::{AnalyzeArgs, ValidateArgs};

/// Merge flags over the config file, then run the analysis.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let config = load_config(args.config.as_deref())?;
    let options = config.analysis_options(args.threshold, args.confidence)?;
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output.dir.clone())
        .unwrap_or_else(|| default_output_dir(&args.input));
    let format = args
        .format
        .map_or(config.output.format, OutputFormat::from);
    pipeline::run_analyze(&AnalyzeRequest {
        input: args.input.clone(),
        options,
        output_dir,
        format,
        dry_run: args.dry_run,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidateOutcome> {
    pipeline::run_validate(&args.input)
}
