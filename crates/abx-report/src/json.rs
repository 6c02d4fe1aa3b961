use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use abx_model::AnalysisResults;
use tracing::debug;

use crate::error::{ReportError, Result};

/// Serialize `results` as pretty-printed JSON into `writer`.
pub fn write_results_json_to<W: Write>(
    writer: W,
    results: &AnalysisResults,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, results)
}

pub fn write_results_json(path: &Path, results: &AnalysisResults) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_results_json_to(&mut writer, results).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote results document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abx_model::AnalysisOptions;

    #[test]
    fn document_contains_options_and_counts() {
        let results = AnalysisResults {
            options: AnalysisOptions::default(),
            record_count: 7,
            retained: vec!["AMP".to_string()],
            antibiotics: Vec::new(),
            combinations: Vec::new(),
        };
        let mut out = Vec::new();
        write_results_json_to(&mut out, &results).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        insta::assert_json_snapshot!(value, @r#"
        {
          "antibiotics": [],
          "combinations": [],
          "options": {
            "confidence_level": 95.0,
            "threshold": 0.0
          },
          "record_count": 7,
          "retained": [
            "AMP"
          ]
        }
        "#);
    }
}
