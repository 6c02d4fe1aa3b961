//! Statistics engine for antibiotic susceptibility matrices.
//!
//! The pipeline is: [`filter_by_threshold`] → [`antibiotic_results`] and
//! [`combination_results`], both of which estimate intervals with
//! [`clopper_pearson`]. [`analyze`] runs all of it for one set of options.

pub mod beta;
pub mod combination;
pub mod filter;
pub mod interval;
pub mod pipeline;
pub mod single;

pub use beta::{beta_quantile, regularized_incomplete_beta};
pub use combination::{PairCounts, combination_results, count_pair};
pub use filter::{FilteredMatrix, filter_by_threshold, tested_fraction};
pub use interval::{ConfidenceInterval, clopper_pearson};
pub use pipeline::analyze;
pub use single::antibiotic_results;
