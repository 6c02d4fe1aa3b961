use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Create `dir` and its parents when they do not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-decimal text form used in the CSV tables.
pub(crate) fn percent_text(value: f64) -> String {
    format!("{:.2}", round2(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(29.240_177), 29.24);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn percent_text_keeps_two_places() {
        assert_eq!(percent_text(75.0), "75.00");
        assert_eq!(percent_text(9.429_932), "9.43");
        assert_eq!(percent_text(0.0), "0.00");
    }

    #[test]
    fn ensure_output_dir_creates_nested() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }
}
