use std::fmt;

use serde::{Deserialize, Serialize};

/// Which report files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn wants_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    pub fn wants_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}
