//! Cell canonicalization.

use abx_model::{ORGANISM_COLUMN, RawTable};

/// Canonical form of one antibiotic cell.
///
/// Steps, in order: trim, uppercase, `I` → `S`, blank → `N`. Anything else
/// is kept as-is for validation to report.
pub fn canonical_cell(value: Option<&str>) -> String {
    let upper = value.map(str::trim).unwrap_or_default().to_uppercase();
    match upper.as_str() {
        "I" => "S".to_string(),
        "" => "N".to_string(),
        _ => upper,
    }
}

/// Return a canonical copy of `raw`.
///
/// The first column is renamed to [`ORGANISM_COLUMN`] and its values are
/// left untouched; every other cell goes through [`canonical_cell`] and is
/// always present afterwards. Applying this twice gives the same table as
/// applying it once.
pub fn canonicalize(raw: &RawTable) -> RawTable {
    let headers = raw
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == 0 {
                ORGANISM_COLUMN.to_string()
            } else {
                header.trim().to_string()
            }
        })
        .collect();

    let rows = raw
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(idx, value)| {
                    if idx == 0 {
                        value.clone()
                    } else {
                        Some(canonical_cell(value.as_deref()))
                    }
                })
                .collect()
        })
        .collect();

    RawTable::new(headers, rows)
}
