//! Categorical susceptibility call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single canonical test result for one organism and one antibiotic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Call {
    /// `S`: the organism responds to the antibiotic.
    #[serde(rename = "S")]
    Susceptible,
    /// `R`: the organism does not respond.
    #[serde(rename = "R")]
    Resistant,
    /// `N`: no result recorded.
    #[serde(rename = "N")]
    NotTested,
}

impl Call {
    /// Parse an already canonical symbol. Only `S`, `R` and `N` are accepted.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "S" => Some(Self::Susceptible),
            "R" => Some(Self::Resistant),
            "N" => Some(Self::NotTested),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Susceptible => "S",
            Self::Resistant => "R",
            Self::NotTested => "N",
        }
    }

    /// True for `S` and `R`.
    pub fn is_tested(self) -> bool {
        !matches!(self, Self::NotTested)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
