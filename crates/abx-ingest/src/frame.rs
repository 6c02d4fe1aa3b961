//! DataFrame to [`RawTable`] conversion.

use abx_model::RawTable;
use polars::prelude::{DataFrame, DataType};

use crate::error::Result;

/// Convert a DataFrame into a row-major [`RawTable`].
///
/// Every column is cast to text; nulls become missing cells. Column order is
/// preserved, so the first column stays the organism identifier.
pub fn frame_to_raw_table(df: &DataFrame) -> Result<RawTable> {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut rows: Vec<Vec<Option<String>>> = (0..df.height())
        .map(|_| Vec::with_capacity(headers.len()))
        .collect();

    for column in df.get_columns() {
        let text = column.cast(&DataType::String)?;
        let values = text.str()?;
        for (row, value) in rows.iter_mut().zip(values.into_iter()) {
            row.push(value.map(str::to_string));
        }
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn converts_columns_to_rows() {
        let df = test_df(vec![
            ("Organism", vec![Some("E. coli"), Some("S. aureus")]),
            ("AMP", vec![Some("S"), None]),
            ("GEN", vec![Some("r"), Some("I")]),
        ]);
        let table = frame_to_raw_table(&df).unwrap();

        assert_eq!(table.headers, vec!["Organism", "AMP", "GEN"]);
        assert_eq!(table.height(), 2);
        assert_eq!(
            table.rows[0],
            vec![
                Some("E. coli".to_string()),
                Some("S".to_string()),
                Some("r".to_string())
            ]
        );
        assert_eq!(table.rows[1][1], None);
        assert_eq!(table.cell(1, 2), Some("I"));
    }

    #[test]
    fn numeric_columns_become_text() {
        let cols = vec![
            Series::new("Organism".into(), vec!["a", "b"]).into_column(),
            Series::new("AMP".into(), vec![1i64, 2]).into_column(),
        ];
        let df = DataFrame::new(cols).unwrap();
        let table = frame_to_raw_table(&df).unwrap();
        assert_eq!(table.cell(0, 1), Some("1"));
        assert_eq!(table.cell(1, 1), Some("2"));
    }
}
