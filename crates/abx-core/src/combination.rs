//! Pairwise combination effectiveness.
//!
//! For a pair of antibiotics a record is:
//! - tested when at least one drug has an `S` or `R` call,
//! - susceptible when at least one drug is `S`,
//! - resistant only when both drugs are `R`.
//!
//! Local effectiveness divides by tested records; global effectiveness
//! divides by the whole population, so untested records count as failures.

use abx_model::{AntibioticColumn, Call, CombinationResult};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::filter::FilteredMatrix;
use crate::interval::clopper_pearson;

/// Record counts for one antibiotic pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    pub tested: usize,
    pub susceptible: usize,
    pub resistant: usize,
}

/// Count tested, susceptible and resistant records for a pair of columns.
pub fn count_pair(first: &AntibioticColumn, second: &AntibioticColumn) -> PairCounts {
    let mut counts = PairCounts::default();
    for (&a, &b) in first.calls.iter().zip(&second.calls) {
        if a.is_tested() || b.is_tested() {
            counts.tested += 1;
        }
        if a == Call::Susceptible || b == Call::Susceptible {
            counts.susceptible += 1;
        }
        if a == Call::Resistant && b == Call::Resistant {
            counts.resistant += 1;
        }
    }
    counts
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn pair_result(
    first: &AntibioticColumn,
    second: &AntibioticColumn,
    records: usize,
    level: f64,
) -> CombinationResult {
    let counts = count_pair(first, second);
    let local = ratio(counts.susceptible, counts.tested);
    let global = ratio(counts.susceptible, records);
    let (local_lower, local_upper) = clopper_pearson(local, counts.tested, level).to_percent();
    let (global_lower, global_upper) = clopper_pearson(global, records, level).to_percent();

    CombinationResult {
        first: first.name.clone(),
        second: second.name.clone(),
        local_effectiveness: local * 100.0,
        global_effectiveness: global * 100.0,
        local_lower,
        local_upper,
        global_lower,
        global_upper,
        susceptible: counts.susceptible,
        resistant: counts.resistant,
        tested: counts.tested,
        tested_percentage: ratio(counts.tested, records) * 100.0,
    }
}

/// Effectiveness of every unordered pair of retained antibiotics.
///
/// Pairs are generated first-then-second in column order and evaluated in
/// parallel; the result is sorted by local effectiveness, highest first,
/// with ties left in generation order.
pub fn combination_results(view: &FilteredMatrix<'_>, level: f64) -> Vec<CombinationResult> {
    let columns: Vec<&AntibioticColumn> = view.columns().collect();
    let records = view.record_count();

    let pairs: Vec<(usize, usize)> = (0..columns.len())
        .flat_map(|i| ((i + 1)..columns.len()).map(move |j| (i, j)))
        .collect();
    debug!(antibiotics = columns.len(), pairs = pairs.len(), "evaluating pairs");

    let mut results: Vec<CombinationResult> = pairs
        .par_iter()
        .map(|&(i, j)| pair_result(columns[i], columns[j], records, level))
        .collect();

    results.sort_by(|a, b| b.local_effectiveness.total_cmp(&a.local_effectiveness));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_by_threshold;
    use abx_model::Call::{NotTested as N, Resistant as R, Susceptible as S};
    use abx_model::TestMatrix;

    #[test]
    fn pair_semantics() {
        let a = AntibioticColumn::new("A", vec![S, R, R, N, N, S]);
        let b = AntibioticColumn::new("B", vec![R, R, N, N, S, S]);
        assert_eq!(
            count_pair(&a, &b),
            PairCounts {
                tested: 5,
                susceptible: 3,
                resistant: 1,
            }
        );
    }

    #[test]
    fn untested_pair_falls_back_to_zero() {
        let m = TestMatrix::new(
            vec!["a".into(), "b".into()],
            vec![
                AntibioticColumn::new("A", vec![N, N]),
                AntibioticColumn::new("B", vec![N, N]),
            ],
        )
        .unwrap();
        let results = combination_results(&filter_by_threshold(&m, 0.0), 0.95);
        assert_eq!(results.len(), 1);
        let pair = &results[0];
        assert_eq!(pair.tested, 0);
        assert_eq!(pair.local_effectiveness, 0.0);
        assert_eq!((pair.local_lower, pair.local_upper), (0.0, 100.0));
        assert_eq!(pair.global_effectiveness, 0.0);
        assert_eq!(pair.global_lower, 0.0);
        assert!(pair.global_upper < 100.0);
        assert_eq!(pair.tested_percentage, 0.0);
    }

    #[test]
    fn every_unordered_pair_once() {
        let calls = vec![S, R];
        let m = TestMatrix::new(
            vec!["a".into(), "b".into()],
            ["A", "B", "C", "D"]
                .iter()
                .map(|name| AntibioticColumn::new(*name, calls.clone()))
                .collect(),
        )
        .unwrap();
        let results = combination_results(&filter_by_threshold(&m, 0.0), 0.95);
        let labels: Vec<String> = results.iter().map(CombinationResult::label).collect();
        // All pairs tie, so generation order is kept.
        assert_eq!(
            labels,
            vec!["A + B", "A + C", "A + D", "B + C", "B + D", "C + D"]
        );
    }

    #[test]
    fn sorted_by_local_effectiveness() {
        let m = TestMatrix::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                AntibioticColumn::new("A", vec![R, R, R]),
                AntibioticColumn::new("B", vec![R, R, S]),
                AntibioticColumn::new("C", vec![S, S, S]),
            ],
        )
        .unwrap();
        let results = combination_results(&filter_by_threshold(&m, 0.0), 0.95);
        let labels: Vec<String> = results.iter().map(CombinationResult::label).collect();
        assert_eq!(labels, vec!["A + C", "B + C", "A + B"]);
        assert_eq!(results[2].resistant, 2);
    }

    #[test]
    fn fewer_than_two_antibiotics_gives_no_pairs() {
        let m = TestMatrix::new(
            vec!["a".into()],
            vec![AntibioticColumn::new("A", vec![S])],
        )
        .unwrap();
        assert!(combination_results(&filter_by_threshold(&m, 0.0), 0.95).is_empty());
    }
}
