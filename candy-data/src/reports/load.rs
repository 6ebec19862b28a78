//! Reading the report export from disk.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use thiserror::Error;

use super::ReportRow;

/// Errors returned when loading the report export.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportLoadError {
    /// The export could not be read.
    #[error("failed to read report export {path}: {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The export was not a JSON array of report rows.
    #[error("failed to parse report export {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Parse report rows from a JSON string.
///
/// # Errors
///
/// Returns the JSON error when the text is not an array of report rows.
pub fn parse_reports(json: &str) -> Result<Vec<ReportRow>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the report export at `path`.
///
/// # Errors
///
/// Returns [`ReportLoadError::Read`] when the file cannot be read and
/// [`ReportLoadError::Parse`] when it is not a valid export.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use candy_data::{candidates_from_reports, load_reports};
///
/// # fn main() -> Result<(), candy_data::ReportLoadError> {
/// let rows = load_reports(Utf8Path::new("reports.json"))?;
/// let candidates = candidates_from_reports(&rows);
/// println!("{} houses", candidates.len());
/// # Ok(())
/// # }
/// ```
pub fn load_reports(path: &Utf8Path) -> Result<Vec<ReportRow>, ReportLoadError> {
    let json = candy_fs::read_utf8_to_string(path).map_err(|source| ReportLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_reports(&json).map_err(|source| ReportLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} report row(s) from {path}", rows.len());
    Ok(rows)
}
