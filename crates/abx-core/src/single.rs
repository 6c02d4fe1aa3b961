//! Per-antibiotic susceptibility.

use abx_model::{AntibioticResult, Call};
use tracing::{debug, warn};

use crate::filter::FilteredMatrix;
use crate::interval::clopper_pearson;

/// Susceptibility of every retained antibiotic, most effective first.
///
/// Antibiotics with no `S` or `R` call are left out. `level` is the
/// confidence level as a fraction. Equal percentages keep column order.
pub fn antibiotic_results(view: &FilteredMatrix<'_>, level: f64) -> Vec<AntibioticResult> {
    let records = view.record_count();
    let mut results = Vec::with_capacity(view.len());

    for column in view.columns() {
        let susceptible = column.count(Call::Susceptible);
        let resistant = column.count(Call::Resistant);
        let tested = susceptible + resistant;
        if tested == 0 {
            warn!(antibiotic = %column.name, "no tested records, excluded");
            continue;
        }

        let proportion = susceptible as f64 / tested as f64;
        let (lower_bound, upper_bound) = clopper_pearson(proportion, tested, level).to_percent();
        let result = AntibioticResult {
            antibiotic: column.name.clone(),
            susceptibility: proportion * 100.0,
            lower_bound,
            upper_bound,
            susceptible,
            resistant,
            tested_percentage: tested as f64 / records as f64 * 100.0,
        };
        debug!(
            antibiotic = %result.antibiotic,
            susceptible,
            resistant,
            susceptibility = result.susceptibility,
            "antibiotic computed"
        );
        results.push(result);
    }

    results.sort_by(|a, b| b.susceptibility.total_cmp(&a.susceptibility));
    results
}
