//! One analysis run over a validated matrix.

use std::time::Instant;

use abx_model::{AnalysisOptions, AnalysisResults, Result, TestMatrix};
use tracing::{info, info_span};

use crate::combination::combination_results;
use crate::filter::filter_by_threshold;
use crate::single::antibiotic_results;

/// Filter `matrix` by the configured threshold and compute single and
/// pairwise results.
///
/// Fails only when `options` are out of range. Running twice with the same
/// inputs gives identical results.
pub fn analyze(matrix: &TestMatrix, options: &AnalysisOptions) -> Result<AnalysisResults> {
    let options = options.validate()?;
    let span = info_span!(
        "analyze",
        threshold = options.threshold,
        confidence_level = options.confidence_level
    );
    let _guard = span.enter();
    let start = Instant::now();

    let view = filter_by_threshold(matrix, options.threshold_fraction());
    info!(
        antibiotics = matrix.antibiotic_count(),
        retained = view.len(),
        records = matrix.record_count(),
        "threshold filter applied"
    );

    let level = options.confidence_fraction();
    let antibiotics = antibiotic_results(&view, level);
    let combinations = combination_results(&view, level);
    info!(
        antibiotics = antibiotics.len(),
        combinations = combinations.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    Ok(AnalysisResults {
        options,
        record_count: matrix.record_count(),
        retained: view.names(),
        antibiotics,
        combinations,
    })
}
