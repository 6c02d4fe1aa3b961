//! Structure and value validation.

use std::collections::BTreeSet;
use std::time::Instant;

use abx_model::{AntibioticColumn, Call, RawTable, TestMatrix};
use tracing::{debug, info, warn};

use crate::error::{InvalidCell, Result, StructuralError, ValidationError};

/// Check the column layout of a table.
///
/// The first column is the organism identifier; antibiotic headers must be
/// non-blank and unique, and every row must match the header width.
pub fn check_structure(table: &RawTable) -> std::result::Result<(), StructuralError> {
    if table.headers.is_empty() {
        return Err(StructuralError::NoColumns);
    }

    let mut seen = BTreeSet::new();
    for (index, header) in table.headers.iter().enumerate().skip(1) {
        let name = header.trim();
        if name.is_empty() {
            return Err(StructuralError::BlankHeader { index });
        }
        if !seen.insert(name) {
            return Err(StructuralError::DuplicateAntibiotic {
                name: name.to_string(),
            });
        }
    }

    for (row, cells) in table.rows.iter().enumerate() {
        if cells.len() != table.width() {
            return Err(StructuralError::RaggedRow {
                row,
                expected: table.width(),
                found: cells.len(),
            });
        }
    }

    Ok(())
}

/// Build a [`TestMatrix`] from a canonical table.
///
/// Every cell outside `S`, `R`, `N` is collected before failing, so a single
/// error lists all locations to fix.
pub fn validate(table: &RawTable) -> Result<TestMatrix> {
    let start = Instant::now();
    check_structure(table)?;

    let organisms: Vec<String> = table
        .rows
        .iter()
        .map(|row| row[0].clone().unwrap_or_default())
        .collect();

    let mut invalid = Vec::new();
    let mut columns: Vec<AntibioticColumn> = table
        .headers
        .iter()
        .skip(1)
        .map(|name| AntibioticColumn::new(name.trim(), Vec::with_capacity(table.height())))
        .collect();

    for (row, cells) in table.rows.iter().enumerate() {
        for (column, value) in columns.iter_mut().zip(cells.iter().skip(1)) {
            let value = value.as_deref().unwrap_or_default();
            match Call::from_symbol(value) {
                Some(call) => column.calls.push(call),
                None => {
                    debug!(row, column = %column.name, value, "invalid call");
                    invalid.push(InvalidCell {
                        row,
                        column: column.name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }
    }

    if !invalid.is_empty() {
        warn!(invalid_cells = invalid.len(), "validation failed");
        return Err(ValidationError { cells: invalid }.into());
    }

    let matrix = TestMatrix::new(organisms, columns)?;
    info!(
        records = matrix.record_count(),
        antibiotics = matrix.antibiotic_count(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    Ok(matrix)
}
