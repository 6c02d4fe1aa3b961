//! Threshold-based antibiotic column filtering.

use abx_model::{AntibioticColumn, TestMatrix};
use tracing::debug;

/// Column-projected view of a [`TestMatrix`].
///
/// Holds the indices of retained antibiotics in original order; the
/// organism column is implicitly always kept.
#[derive(Debug, Clone)]
pub struct FilteredMatrix<'a> {
    matrix: &'a TestMatrix,
    retained: Vec<usize>,
}

impl<'a> FilteredMatrix<'a> {
    /// Full population size, independent of filtering.
    pub fn record_count(&self) -> usize {
        self.matrix.record_count()
    }

    pub fn len(&self) -> usize {
        self.retained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &'a AntibioticColumn> + '_ {
        let antibiotics = self.matrix.antibiotics();
        self.retained.iter().map(move |&idx| &antibiotics[idx])
    }

    pub fn names(&self) -> Vec<String> {
        self.columns().map(|column| column.name.clone()).collect()
    }
}

/// Fraction of records with an `S` or `R` call in `column`.
///
/// An empty population has nothing tested.
pub fn tested_fraction(column: &AntibioticColumn, records: usize) -> f64 {
    if records == 0 {
        return 0.0;
    }
    column.tested_count() as f64 / records as f64
}

/// Keep antibiotics whose tested fraction is at least `tau` (in `[0, 1]`).
///
/// `tau = 0` keeps everything, including columns of an empty matrix.
pub fn filter_by_threshold(matrix: &TestMatrix, tau: f64) -> FilteredMatrix<'_> {
    let records = matrix.record_count();
    let retained = matrix
        .antibiotics()
        .iter()
        .enumerate()
        .filter(|(_, column)| {
            let fraction = tested_fraction(column, records);
            let keep = fraction >= tau;
            debug!(antibiotic = %column.name, fraction, keep, "threshold check");
            keep
        })
        .map(|(idx, _)| idx)
        .collect();

    FilteredMatrix { matrix, retained }
}
