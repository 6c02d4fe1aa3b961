//! Normalization errors.

use std::fmt;

use abx_model::ModelError;
use thiserror::Error;

/// The table does not have the organism + antibiotic column layout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralError {
    #[error("table has no columns; expected a microorganism column followed by antibiotics")]
    NoColumns,
    #[error("antibiotic column {index} has a blank header")]
    BlankHeader { index: usize },
    #[error("antibiotic column '{name}' appears more than once")]
    DuplicateAntibiotic { name: String },
    #[error("row {row} has {found} cells, header has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// One cell that is not `S`, `R` or `N` after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCell {
    /// Zero-based data row.
    pub row: usize,
    /// Antibiotic column name.
    pub column: String,
    /// Canonicalized value found in the cell.
    pub value: String,
}

impl InvalidCell {
    /// One-based line in the source file, counting the header line.
    pub fn line(&self) -> usize {
        self.row + 2
    }
}

impl fmt::Display for InvalidCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} (line {}), column '{}': '{}'",
            self.row,
            self.line(),
            self.column,
            self.value
        )
    }
}

/// Every invalid cell of a table, in row-major order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub struct ValidationError {
    pub cells: Vec<InvalidCell>,
}

impl ValidationError {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cell(s) hold values other than S, R or N (expected S, R, N, I or blank)",
            self.cells.len()
        )?;
        for cell in &self.cells {
            write!(f, "\n  {cell}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NormalizeError {
    #[error(transparent)]
    Structural(#[from] StructuralError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
