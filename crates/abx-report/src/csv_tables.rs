//! Fixed-layout CSV tables for single and pairwise results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use abx_model::{AntibioticResult, CombinationResult};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::common::percent_text;
use crate::error::{ReportError, Result};

pub const ANTIBIOTIC_HEADERS: [&str; 7] = [
    "antibiotic",
    "susceptibility",
    "lower_bound",
    "upper_bound",
    "susceptible",
    "resistant",
    "tested_percentage",
];

pub const COMBINATION_HEADERS: [&str; 12] = [
    "first",
    "second",
    "local_effectiveness",
    "global_effectiveness",
    "local_lower",
    "local_upper",
    "global_lower",
    "global_upper",
    "susceptible",
    "resistant",
    "tested",
    "tested_percentage",
];

#[derive(Serialize)]
struct AntibioticRow<'a> {
    antibiotic: &'a str,
    susceptibility: String,
    lower_bound: String,
    upper_bound: String,
    susceptible: usize,
    resistant: usize,
    tested_percentage: String,
}

impl<'a> From<&'a AntibioticResult> for AntibioticRow<'a> {
    fn from(result: &'a AntibioticResult) -> Self {
        Self {
            antibiotic: &result.antibiotic,
            susceptibility: percent_text(result.susceptibility),
            lower_bound: percent_text(result.lower_bound),
            upper_bound: percent_text(result.upper_bound),
            susceptible: result.susceptible,
            resistant: result.resistant,
            tested_percentage: percent_text(result.tested_percentage),
        }
    }
}

#[derive(Serialize)]
struct CombinationRow<'a> {
    first: &'a str,
    second: &'a str,
    local_effectiveness: String,
    global_effectiveness: String,
    local_lower: String,
    local_upper: String,
    global_lower: String,
    global_upper: String,
    susceptible: usize,
    resistant: usize,
    tested: usize,
    tested_percentage: String,
}

impl<'a> From<&'a CombinationResult> for CombinationRow<'a> {
    fn from(result: &'a CombinationResult) -> Self {
        Self {
            first: &result.first,
            second: &result.second,
            local_effectiveness: percent_text(result.local_effectiveness),
            global_effectiveness: percent_text(result.global_effectiveness),
            local_lower: percent_text(result.local_lower),
            local_upper: percent_text(result.local_upper),
            global_lower: percent_text(result.global_lower),
            global_upper: percent_text(result.global_upper),
            susceptible: result.susceptible,
            resistant: result.resistant,
            tested: result.tested,
            tested_percentage: percent_text(result.tested_percentage),
        }
    }
}

/// Write the single-antibiotic table to any writer.
///
/// The header row is always written, even with no results.
pub fn write_antibiotic_rows<W: Write>(
    writer: W,
    results: &[AntibioticResult],
) -> std::result::Result<(), csv::Error> {
    let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);
    out.write_record(ANTIBIOTIC_HEADERS)?;
    for result in results {
        out.serialize(AntibioticRow::from(result))?;
    }
    out.flush()?;
    Ok(())
}

/// Write the combination table to any writer.
pub fn write_combination_rows<W: Write>(
    writer: W,
    results: &[CombinationResult],
) -> std::result::Result<(), csv::Error> {
    let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);
    out.write_record(COMBINATION_HEADERS)?;
    for result in results {
        out.serialize(CombinationRow::from(result))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_antibiotics_csv(path: &Path, results: &[AntibioticResult]) -> Result<()> {
    let file = create(path)?;
    write_antibiotic_rows(file, results).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = results.len(), "wrote antibiotic table");
    Ok(())
}

pub fn write_combinations_csv(path: &Path, results: &[CombinationResult]) -> Result<()> {
    let file = create(path)?;
    write_combination_rows(file, results).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = results.len(), "wrote combination table");
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
}
