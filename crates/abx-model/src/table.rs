#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Tabular input as loaded from disk, before canonicalization.
///
/// The first header names the microorganism identifier column; every other
/// header names an antibiotic. `None` marks a missing cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from string literals, treating `""` as a present but blank cell.
    pub fn from_strs(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| Some((*v).to_string())).collect())
                .collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|v| v.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup_handles_missing_values() {
        let table = RawTable::new(
            vec!["Organism".to_string(), "AMP".to_string()],
            vec![vec![Some("E. coli".to_string()), None]],
        );
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 1);
        assert_eq!(table.cell(0, 0), Some("E. coli"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(3, 0), None);
    }
}
