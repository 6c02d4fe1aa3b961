//! Canonical microorganism × antibiotic test matrix.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::call::Call;
use crate::error::{ModelError, Result};

/// Name given to the first column regardless of its original label.
pub const ORGANISM_COLUMN: &str = "Microorganism";

/// One antibiotic and its calls, one per organism record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntibioticColumn {
    pub name: String,
    pub calls: Vec<Call>,
}

impl AntibioticColumn {
    pub fn new(name: impl Into<String>, calls: Vec<Call>) -> Self {
        Self {
            name: name.into(),
            calls,
        }
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Number of records with an `S` or `R` call.
    pub fn tested_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_tested()).count()
    }
}

/// Validated matrix: every cell is one of `S`, `R`, `N`.
///
/// Immutable once built. Filtering produces a borrowed view rather than a
/// modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMatrix {
    organisms: Vec<String>,
    antibiotics: Vec<AntibioticColumn>,
}

impl TestMatrix {
    pub fn new(organisms: Vec<String>, antibiotics: Vec<AntibioticColumn>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for column in &antibiotics {
            if column.calls.len() != organisms.len() {
                return Err(ModelError::ColumnLength {
                    column: column.name.clone(),
                    expected: organisms.len(),
                    found: column.calls.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateAntibiotic(column.name.clone()));
            }
        }
        Ok(Self {
            organisms,
            antibiotics,
        })
    }

    pub fn organism_column(&self) -> &'static str {
        ORGANISM_COLUMN
    }

    pub fn organisms(&self) -> &[String] {
        &self.organisms
    }

    pub fn antibiotics(&self) -> &[AntibioticColumn] {
        &self.antibiotics
    }

    pub fn antibiotic(&self, name: &str) -> Option<&AntibioticColumn> {
        self.antibiotics.iter().find(|c| c.name == name)
    }

    /// Number of organism records (the full population).
    pub fn record_count(&self) -> usize {
        self.organisms.len()
    }

    pub fn antibiotic_count(&self) -> usize {
        self.antibiotics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_columns() {
        let err = TestMatrix::new(
            vec!["a".into(), "b".into()],
            vec![AntibioticColumn::new("AMP", vec![Call::Susceptible])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::ColumnLength {
                column: "AMP".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn rejects_duplicate_antibiotics() {
        let err = TestMatrix::new(
            vec!["a".into()],
            vec![
                AntibioticColumn::new("AMP", vec![Call::Susceptible]),
                AntibioticColumn::new("AMP", vec![Call::Resistant]),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicateAntibiotic("AMP".to_string()));
    }

    #[test]
    fn column_counts() {
        let column = AntibioticColumn::new(
            "CIP",
            vec![
                Call::Susceptible,
                Call::Resistant,
                Call::NotTested,
                Call::Susceptible,
            ],
        );
        assert_eq!(column.count(Call::Susceptible), 2);
        assert_eq!(column.count(Call::Resistant), 1);
        assert_eq!(column.tested_count(), 3);
    }
}
