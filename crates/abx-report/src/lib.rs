//! Report generation for analysis results.
//!
//! - **CSV**: `antibiotics.csv` and `combinations.csv`, percentages rounded
//!   to two decimals
//! - **JSON**: `results.json` with options, counts and full-precision results

mod common;
mod csv_tables;
mod error;
mod format;
mod json;

use std::path::{Path, PathBuf};
use std::time::Instant;

use abx_model::AnalysisResults;
use tracing::{info, info_span};

pub use common::{ensure_output_dir, round2};
pub use csv_tables::{
    ANTIBIOTIC_HEADERS, COMBINATION_HEADERS, write_antibiotic_rows, write_antibiotics_csv,
    write_combination_rows, write_combinations_csv,
};
pub use error::{ReportError, Result};
pub use format::OutputFormat;
pub use json::{write_results_json, write_results_json_to};

/// File name of the single-antibiotic table.
pub const ANTIBIOTICS_FILE: &str = "antibiotics.csv";
/// File name of the combination table.
pub const COMBINATIONS_FILE: &str = "combinations.csv";
/// File name of the JSON document.
pub const RESULTS_FILE: &str = "results.json";

/// Paths of the files written by [`write_reports`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPaths {
    pub antibiotics: Option<PathBuf>,
    pub combinations: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl ReportPaths {
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.antibiotics, &self.combinations, &self.json]
            .into_iter()
            .flatten()
    }
}

/// Write every report selected by `format` into `output_dir`, creating it
/// when missing.
pub fn write_reports(
    output_dir: &Path,
    results: &AnalysisResults,
    format: OutputFormat,
) -> Result<ReportPaths> {
    let span = info_span!("report", output_dir = %output_dir.display(), ?format);
    let _guard = span.enter();
    let start = Instant::now();

    ensure_output_dir(output_dir)?;
    let mut paths = ReportPaths::default();
    if format.wants_csv() {
        let path = output_dir.join(ANTIBIOTICS_FILE);
        write_antibiotics_csv(&path, &results.antibiotics)?;
        paths.antibiotics = Some(path);

        let path = output_dir.join(COMBINATIONS_FILE);
        write_combinations_csv(&path, &results.combinations)?;
        paths.combinations = Some(path);
    }
    if format.wants_json() {
        let path = output_dir.join(RESULTS_FILE);
        write_results_json(&path, results)?;
        paths.json = Some(path);
    }

    info!(
        files = paths.iter().count(),
        duration_ms = start.elapsed().as_millis(),
        "reports written"
    );
    Ok(paths)
}
