//! Exact binomial (Clopper–Pearson) confidence intervals.

use crate::beta::beta_quantile;

/// Interval on a proportion, both ends in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// The interval that carries no information.
    pub const UNINFORMATIVE: Self = Self {
        lower: 0.0,
        upper: 1.0,
    };

    /// Both ends scaled to percent.
    pub fn to_percent(self) -> (f64, f64) {
        (self.lower * 100.0, self.upper * 100.0)
    }
}

/// Clopper–Pearson interval for an observed proportion `p` over `n` trials.
///
/// `level` is the confidence level as a fraction in `(0, 1)`. With
/// `α = 1 − level`:
///
/// ```text
/// lower = BetaQuantile(α/2,     p·n,     (1−p)·n + 1)
/// upper = BetaQuantile(1 − α/2, p·n + 1, (1−p)·n)
/// ```
///
/// Zero successes give a lower bound of 0 and zero failures an upper bound
/// of 1; `n = 0` gives `[0, 1]`.
pub fn clopper_pearson(p: f64, n: usize, level: f64) -> ConfidenceInterval {
    let alpha = 1.0 - level;
    let n = n as f64;
    let successes = p * n;
    let failures = (1.0 - p) * n;

    ConfidenceInterval {
        lower: beta_quantile(alpha / 2.0, successes, failures + 1.0),
        upper: beta_quantile(1.0 - alpha / 2.0, successes + 1.0, failures),
    }
}
