//! CSV file reading.
//!
//! Header names come from the file itself through the `csv` reader, so a
//! repeated antibiotic name survives ingest and is rejected by the
//! normalizer. Polars renames duplicates and only supplies the cell values.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use abx_model::RawTable;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info, info_span, warn};

use crate::error::{IngestError, Result};
use crate::frame::frame_to_raw_table;

/// Maximum file size for CSV loading (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Wide datasets beyond this many columns are logged.
const WIDE_DATASET_COLUMNS: usize = 500;

const UTF8_BOM: char = '\u{feff}';

/// Cheap checks before parsing: the file exists, fits in `max_size` bytes
/// and does not start with a UTF-16 byte order mark.
pub fn preflight(path: &Path, max_size: u64) -> Result<()> {
    let size = fs::metadata(path).map_err(|e| io_error(path, e))?.len();
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    let mut head = [0u8; 2];
    let read = File::open(path)
        .and_then(|mut file| file.read(&mut head))
        .map_err(|e| io_error(path, e))?;
    let encoding = match (read, head) {
        (2, [0xFF, 0xFE]) => Some("UTF-16 LE"),
        (2, [0xFE, 0xFF]) => Some("UTF-16 BE"),
        _ => None,
    };
    match encoding {
        Some(encoding) => Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        }),
        None => Ok(()),
    }
}

/// Header names exactly as written in the file, duplicates included.
///
/// Blank names are rejected; a leading UTF-8 BOM is dropped.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(parse_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches(UTF8_BOM).to_string()
            } else {
                name.to_string()
            }
        })
        .collect();

    if headers.iter().any(|name| name.trim().is_empty()) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    if headers.len() > WIDE_DATASET_COLUMNS {
        warn!(
            path = %path.display(),
            columns = headers.len(),
            "wide dataset, pairwise statistics grow quadratically with antibiotics"
        );
    }
    Ok(headers)
}

/// Read a CSV file into a DataFrame with every column as text.
///
/// Blank cells come back as nulls.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let parse_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)
}

/// Load a CSV file into a [`RawTable`], running every pre-read check.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    preflight(path, MAX_CSV_FILE_SIZE)?;
    let headers = read_header(path)?;
    let df = read_csv_frame(path)?;
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }
    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} columns but {} were parsed",
                headers.len(),
                df.width()
            ),
        });
    }
    debug!(rows = df.height(), columns = df.width(), "csv parsed");

    let mut table = frame_to_raw_table(&df)?;
    table.headers = headers;
    info!(
        records = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}
