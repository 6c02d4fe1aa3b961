//! Integration tests for canonicalization and validation.

use abx_model::{Call, ORGANISM_COLUMN, RawTable};
use abx_normalize::{NormalizeError, StructuralError, canonicalize, normalize};
use proptest::prelude::*;

#[test]
fn lowercase_intermediate_and_blank_cells_normalize() {
    let raw = RawTable::new(
        vec!["Isolate".into(), "AMP".into(), "GEN".into()],
        vec![
            vec![Some("E. coli".into()), Some("i".into()), None],
            vec![Some("K. pneumoniae".into()), Some("r".into()), Some("".into())],
        ],
    );
    let matrix = normalize(&raw).expect("valid matrix");

    assert_eq!(matrix.organism_column(), ORGANISM_COLUMN);
    assert_eq!(matrix.organisms(), ["E. coli", "K. pneumoniae"]);
    let amp = matrix.antibiotic("AMP").expect("AMP column");
    assert_eq!(amp.calls, vec![Call::Susceptible, Call::Resistant]);
    let gentamicin = matrix.antibiotic("GEN").expect("GEN column");
    assert_eq!(gentamicin.calls, vec![Call::NotTested, Call::NotTested]);
}

#[test]
fn invalid_value_names_row_and_column() {
    let raw = RawTable::from_strs(
        &["Organism", "AMP", "CIP"],
        &[&["a", "S", "R"], &["b", "x", "S"], &["c", "R", "resistant"]],
    );
    let err = normalize(&raw).unwrap_err();
    let NormalizeError::Validation(validation) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(validation.len(), 2);
    assert_eq!(validation.cells[0].row, 1);
    assert_eq!(validation.cells[0].column, "AMP");
    assert_eq!(validation.cells[0].value, "X");
    assert_eq!(validation.cells[0].line(), 3);
    assert_eq!(validation.cells[1].row, 2);
    assert_eq!(validation.cells[1].column, "CIP");
    assert_eq!(validation.cells[1].value, "RESISTANT");
}

#[test]
fn organism_identifiers_are_not_validated() {
    let raw = RawTable::from_strs(&["Organism", "AMP"], &[&["XYZ-12", "S"]]);
    assert!(normalize(&raw).is_ok());
}

#[test]
fn missing_columns_is_structural() {
    let err = normalize(&RawTable::default()).unwrap_err();
    assert_eq!(err, NormalizeError::Structural(StructuralError::NoColumns));
}

fn cell_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(vec!["S", "s", "R", "r", "I", "i", "N", "", " ", "x", "Sr"])
            .prop_map(|v| Some(v.to_string())),
    ]
}

fn table_strategy() -> impl Strategy<Value = RawTable> {
    (1usize..5, 0usize..8).prop_flat_map(|(antibiotics, rows)| {
        prop::collection::vec(
            prop::collection::vec(cell_strategy(), antibiotics),
            rows,
        )
        .prop_map(move |cells| {
            let mut headers = vec!["Organism".to_string()];
            headers.extend((0..antibiotics).map(|i| format!("AB{i}")));
            let rows = cells
                .into_iter()
                .enumerate()
                .map(|(i, mut row)| {
                    row.insert(0, Some(format!("org-{i}")));
                    row
                })
                .collect();
            RawTable::new(headers, rows)
        })
    })
}

proptest! {
    #[test]
    fn canonicalization_is_idempotent(raw in table_strategy()) {
        let once = canonicalize(&raw);
        let twice = canonicalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn valid_matrices_only_hold_canonical_calls(raw in table_strategy()) {
        if let Ok(matrix) = normalize(&raw) {
            prop_assert_eq!(matrix.record_count(), raw.height());
            for column in matrix.antibiotics() {
                prop_assert_eq!(column.calls.len(), raw.height());
            }
        }
    }
}
