//! Configuration options for an analysis run.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default minimum percent of records tested to keep an antibiotic.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

/// Default confidence level, in percent.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 95.0;

/// Options controlling column filtering and interval estimation.
///
/// Both values are percentages, matching how they are entered by users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Minimum percent of records with an `S` or `R` call, within `[0, 100]`.
    pub threshold: f64,
    /// Confidence level of the reported intervals, within `(0, 100)`.
    pub confidence_level: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl AnalysisOptions {
    pub fn new(threshold: f64, confidence_level: f64) -> Result<Self> {
        Self {
            threshold,
            confidence_level,
        }
        .validate()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Check both values are in range, returning the options unchanged.
    pub fn validate(self) -> Result<Self> {
        if !(0.0..=100.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 100.0) {
            return Err(ModelError::InvalidConfidenceLevel(self.confidence_level));
        }
        Ok(self)
    }

    /// Threshold as a fraction τ ∈ [0, 1].
    pub fn threshold_fraction(&self) -> f64 {
        self.threshold / 100.0
    }

    /// Confidence level as a fraction c ∈ (0, 1).
    pub fn confidence_fraction(&self) -> f64 {
        self.confidence_level / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = AnalysisOptions::default().validate().unwrap();
        assert_eq!(options.threshold, 0.0);
        assert_eq!(options.confidence_level, 95.0);
        assert!((options.confidence_fraction() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(AnalysisOptions::new(0.0, 95.0).is_ok());
        assert!(AnalysisOptions::new(100.0, 95.0).is_ok());
        assert_eq!(
            AnalysisOptions::new(100.5, 95.0),
            Err(ModelError::InvalidThreshold(100.5))
        );
        assert_eq!(
            AnalysisOptions::new(-1.0, 95.0),
            Err(ModelError::InvalidThreshold(-1.0))
        );
    }

    #[test]
    fn confidence_bounds_are_exclusive() {
        assert!(AnalysisOptions::new(0.0, 99.9).is_ok());
        assert_eq!(
            AnalysisOptions::new(0.0, 100.0),
            Err(ModelError::InvalidConfidenceLevel(100.0))
        );
        assert_eq!(
            AnalysisOptions::new(0.0, 0.0),
            Err(ModelError::InvalidConfidenceLevel(0.0))
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert!(AnalysisOptions::new(f64::NAN, 95.0).is_err());
        assert!(AnalysisOptions::new(0.0, f64::NAN).is_err());
    }
}
