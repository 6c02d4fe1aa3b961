//! End-to-end tests for loading CSV files into raw tables.

use std::io::Write;

use abx_ingest::{IngestError, read_raw_table};
use abx_normalize::{NormalizeError, StructuralError, normalize};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{content}").expect("write csv");
    file
}

#[test]
fn reads_blank_cells_as_missing() {
    let file = create_temp_csv(
        "Isolate,AMP,GEN,CIP\n\
         E. coli,S,R,\n\
         K. pneumoniae,r,,i\n\
         S. aureus,,s,S\n",
    );
    let table = read_raw_table(file.path()).expect("read table");

    assert_eq!(table.headers, vec!["Isolate", "AMP", "GEN", "CIP"]);
    assert_eq!(table.height(), 3);
    assert_eq!(table.cell(0, 0), Some("E. coli"));
    assert_eq!(table.cell(0, 3), None);
    assert_eq!(table.cell(1, 1), Some("r"));
    assert_eq!(table.cell(1, 2), None);
    assert_eq!(table.cell(2, 1), None);
    assert_eq!(table.cell(2, 2), Some("s"));
}

#[test]
fn keeps_first_column_position() {
    let file = create_temp_csv("Bug,VAN\nE. faecium,R\n");
    let table = read_raw_table(file.path()).expect("read table");
    assert_eq!(table.headers[0], "Bug");
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn missing_file_is_reported() {
    let err = read_raw_table(std::path::Path::new("/no/such/isolates.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn repeated_antibiotic_header_reaches_normalizer() {
    let file = create_temp_csv("Organism,AMP,AMP\nE. coli,S,R\nK. pneumoniae,R,R\n");
    let table = read_raw_table(file.path()).expect("read table");

    assert_eq!(table.headers, vec!["Organism", "AMP", "AMP"]);
    assert_eq!(table.cell(0, 2), Some("R"));

    let err = normalize(&table).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::Structural(StructuralError::DuplicateAntibiotic {
            name: "AMP".to_string(),
        })
    );
}

#[test]
fn quoted_header_names_are_unquoted() {
    let file = create_temp_csv("Organism,\"Trimethoprim, sulfa\",GEN\nE. coli,S,R\n");
    let table = read_raw_table(file.path()).expect("read table");
    assert_eq!(table.headers, vec!["Organism", "Trimethoprim, sulfa", "GEN"]);
}
