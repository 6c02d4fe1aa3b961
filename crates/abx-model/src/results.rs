//! Result records produced by the statistics engine.
//!
//! All percentages are in `[0, 100]`.

use serde::{Deserialize, Serialize};

use crate::options::AnalysisOptions;

/// Susceptibility of a single antibiotic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntibioticResult {
    pub antibiotic: String,
    /// `S / (S + R) × 100`.
    pub susceptibility: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub susceptible: usize,
    pub resistant: usize,
    /// Share of all records with an `S` or `R` call.
    pub tested_percentage: f64,
}

impl AntibioticResult {
    pub fn tested(&self) -> usize {
        self.susceptible + self.resistant
    }
}

/// Effectiveness of an unordered antibiotic pair.
///
/// A record counts as susceptible when either drug is `S`, and as resistant
/// only when both drugs are `R`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    pub first: String,
    pub second: String,
    /// Susceptible share among records where at least one drug was tested.
    pub local_effectiveness: f64,
    /// Susceptible share among all records; untested counts as a failure.
    pub global_effectiveness: f64,
    pub local_lower: f64,
    pub local_upper: f64,
    pub global_lower: f64,
    pub global_upper: f64,
    pub susceptible: usize,
    pub resistant: usize,
    pub tested: usize,
    pub tested_percentage: f64,
}

impl CombinationResult {
    /// Display label `FIRST + SECOND`.
    pub fn label(&self) -> String {
        format!("{} + {}", self.first, self.second)
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub options: AnalysisOptions,
    pub record_count: usize,
    /// Antibiotics that passed the threshold filter, in original order.
    pub retained: Vec<String>,
    pub antibiotics: Vec<AntibioticResult>,
    pub combinations: Vec<CombinationResult>,
}
