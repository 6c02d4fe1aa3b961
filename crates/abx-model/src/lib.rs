//! Data model for antibiotic susceptibility statistics.
//!
//! Holds the raw and canonical test matrices, the categorical call type,
//! the analysis options and the result records produced by the engine.

pub mod call;
pub mod error;
pub mod matrix;
pub mod options;
pub mod results;
pub mod table;

pub use call::Call;
pub use error::{ModelError, Result};
pub use matrix::{AntibioticColumn, ORGANISM_COLUMN, TestMatrix};
pub use options::{AnalysisOptions, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_THRESHOLD};
pub use results::{AnalysisResults, AntibioticResult, CombinationResult};
pub use table::RawTable;
