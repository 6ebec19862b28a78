//! Command-line interface for planning Candy Rush walks.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use candy_core::{MAX_RADIUS_KM, MIN_RADIUS_KM};
use clap::{Parser, Subcommand};

mod error;
mod labels;
mod nearby;
mod plan;

pub use error::CliError;

use labels::{LabelsArgs, run_labels};
use nearby::{NearbyArgs, run_nearby};
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_REPORTS: &str = "reports";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_RADIUS_KM: &str = "radius-km";
pub(crate) const ARG_PLAN_DESIRE: &str = "desire";
pub(crate) const ARG_PLAN_AVOID: &str = "avoid";
pub(crate) const ARG_PLAN_WITH_PATH: &str = "with-path";
pub(crate) const ENV_PLAN_REPORTS: &str = "CANDY_CMDS_PLAN_REPORTS";
pub(crate) const ENV_PLAN_LNG: &str = "CANDY_CMDS_PLAN_LNG";
pub(crate) const ENV_PLAN_LAT: &str = "CANDY_CMDS_PLAN_LAT";
pub(crate) const ENV_LABELS_REPORTS: &str = "CANDY_CMDS_LABELS_REPORTS";
pub(crate) const ENV_NEARBY_REPORTS: &str = "CANDY_CMDS_NEARBY_REPORTS";
pub(crate) const ENV_NEARBY_LNG: &str = "CANDY_CMDS_NEARBY_LNG";
pub(crate) const ENV_NEARBY_LAT: &str = "CANDY_CMDS_NEARBY_LAT";
pub(crate) const LNG_LIMIT: f64 = 180.0;
pub(crate) const LAT_LIMIT: f64 = 90.0;

/// Run the Candy Rush CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, when
/// the report export cannot be loaded, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Labels(args) => run_labels(args),
        Command::Nearby(args) => run_nearby(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "candy-rush",
    about = "Plan walking routes between houses handing out the candy you like",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest a visiting order for reported houses near a center.
    Plan(PlanArgs),
    /// List the candy names present in a report export.
    Labels(LabelsArgs),
    /// List reported houses, optionally within a radius of a center.
    Nearby(NearbyArgs),
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match candy_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Accept a finite coordinate no further than `limit` degrees from zero.
pub(crate) fn checked_coordinate(
    value: f64,
    field: &'static str,
    limit: f64,
) -> Result<f64, CliError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::InvalidCoordinate {
            field,
            limit,
            value,
        })
    }
}

/// Accept a radius within the range the map slider offers.
pub(crate) fn checked_radius(radius_km: f64) -> Result<f64, CliError> {
    if (MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius_km) {
        Ok(radius_km)
    } else {
        Err(CliError::InvalidRadius { radius_km })
    }
}

/// Write `value` to `writer` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: serde::Serialize + ?Sized>(
    writer: &mut dyn std::io::Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
