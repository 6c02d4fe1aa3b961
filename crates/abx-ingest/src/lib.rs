//! Loading of microorganism × antibiotic tables from disk.
//!
//! Files are read with Polars, every column as text, and converted into a
//! [`RawTable`](abx_model::RawTable) for the normalizer.

pub mod error;
pub mod frame;
pub mod reader;

pub use error::{IngestError, Result};
pub use frame::frame_to_raw_table;
pub use reader::{MAX_CSV_FILE_SIZE, preflight, read_csv_frame, read_header, read_raw_table};
