use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("threshold must be within [0, 100], got {0}")]
    InvalidThreshold(f64),
    #[error("confidence level must be within (0, 100), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("column '{column}' has {found} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("antibiotic column '{0}' appears more than once")]
    DuplicateAntibiotic(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
