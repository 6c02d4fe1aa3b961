//! Raw table → canonical [`TestMatrix`](abx_model::TestMatrix).
//!
//! Normalization runs in two pure steps:
//!
//! 1. [`canonicalize`] rewrites every antibiotic cell (uppercase, `I` → `S`,
//!    blank → `N`) and renames the first column to the organism role.
//! 2. [`validate`] checks the table structure, collects every cell that is
//!    still not `S`, `R` or `N`, and builds the typed matrix.

pub mod canonical;
pub mod error;
pub mod validate;

pub use canonical::{canonical_cell, canonicalize};
pub use error::{InvalidCell, NormalizeError, Result, StructuralError, ValidationError};
pub use validate::{check_structure, validate};

use abx_model::{RawTable, TestMatrix};
use tracing::info_span;

/// Canonicalize then validate a raw table.
pub fn normalize(raw: &RawTable) -> Result<TestMatrix> {
    let span = info_span!("normalize", columns = raw.width(), records = raw.height());
    let _guard = span.enter();
    validate(&canonicalize(raw))
}
