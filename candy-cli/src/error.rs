//! Error types emitted by the Candy Rush CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use candy_core::CandyLabelError;
use candy_data::ReportLoadError;
use thiserror::Error;

/// Errors emitted by the Candy Rush CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A coordinate was not a finite value in its valid range.
    #[error("{field} must be a finite value between -{limit} and {limit}, got {value}")]
    InvalidCoordinate {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Largest accepted magnitude.
        limit: f64,
        /// Value supplied by the caller.
        value: f64,
    },
    /// The search radius fell outside the range the planner supports.
    #[error("radius must be between 1 and 25 km, got {radius_km}")]
    InvalidRadius {
        /// Radius supplied by the caller.
        radius_km: f64,
    },
    /// A candy label was blank.
    #[error("invalid --{field} label: {source}")]
    InvalidLabel {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Why the label was rejected.
        #[source]
        source: CandyLabelError,
    },
    /// The same candy was both desired and avoided.
    #[error("candy label '{label}' cannot be both desired and avoided")]
    ConflictingPreference {
        /// The label found in both sets.
        label: String,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the report export failed.
    #[error(transparent)]
    LoadReports(#[from] ReportLoadError),
    /// Serializing command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
