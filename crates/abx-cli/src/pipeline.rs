//! Ingest, normalize, analyze and report, as run by the CLI commands.

use std::path::{Path, PathBuf};
use std::time::Instant;

use abx_core::{analyze, tested_fraction};
use abx_ingest::read_raw_table;
use abx_model::{AnalysisOptions, AnalysisResults, Call, TestMatrix};
use abx_normalize::normalize;
use abx_report::{OutputFormat, ReportPaths, write_reports};
use anyhow::{Context, Result};
use tracing::{info, info_span};

/// Everything `abxstat analyze` needs once flags and config are merged.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub input: PathBuf,
    pub options: AnalysisOptions,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub results: AnalysisResults,
    /// `None` for dry runs.
    pub reports: Option<ReportPaths>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub susceptible: usize,
    pub resistant: usize,
    pub not_tested: usize,
    pub tested_percentage: f64,
}

#[derive(Debug)]
pub struct ValidateOutcome {
    pub input: PathBuf,
    pub record_count: usize,
    pub columns: Vec<ColumnSummary>,
}

/// `output/` next to the input file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

/// Read and normalize a susceptibility table.
pub fn load_matrix(input: &Path) -> Result<TestMatrix> {
    let raw = read_raw_table(input).with_context(|| format!("load {}", input.display()))?;
    let matrix = normalize(&raw).with_context(|| format!("normalize {}", input.display()))?;
    Ok(matrix)
}

pub fn run_analyze(request: &AnalyzeRequest) -> Result<AnalyzeOutcome> {
    let span = info_span!("run", input = %request.input.display(), dry_run = request.dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let matrix = load_matrix(&request.input)?;
    let results = analyze(&matrix, &request.options).context("analyze")?;
    let reports = if request.dry_run {
        info!("dry run, no report files written");
        None
    } else {
        let paths = write_reports(&request.output_dir, &results, request.format)
            .with_context(|| format!("write reports to {}", request.output_dir.display()))?;
        Some(paths)
    };

    info!(duration_ms = start.elapsed().as_millis(), "run complete");
    Ok(AnalyzeOutcome {
        input: request.input.clone(),
        output_dir: request.output_dir.clone(),
        results,
        reports,
    })
}

pub fn run_validate(input: &Path) -> Result<ValidateOutcome> {
    let span = info_span!("validate", input = %input.display());
    let _guard = span.enter();

    let matrix = load_matrix(input)?;
    let records = matrix.record_count();
    let columns = matrix
        .antibiotics()
        .iter()
        .map(|column| ColumnSummary {
            name: column.name.clone(),
            susceptible: column.count(Call::Susceptible),
            resistant: column.count(Call::Resistant),
            not_tested: column.count(Call::NotTested),
            tested_percentage: tested_fraction(column, records) * 100.0,
        })
        .collect();
    info!(records, antibiotics = matrix.antibiotic_count(), "table is valid");
    Ok(ValidateOutcome {
        input: input.to_path_buf(),
        record_count: records,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_dir_sits_next_to_input() {
        assert_eq!(
            default_output_dir(Path::new("data/isolates.csv")),
            PathBuf::from("data/output")
        );
        assert_eq!(
            default_output_dir(Path::new("isolates.csv")),
            PathBuf::from("./output")
        );
    }
}
