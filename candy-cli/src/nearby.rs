//! Nearby command implementation for the Candy Rush CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use candy_core::DEFAULT_RADIUS_KM;
use candy_data::{ReportedLocation, load_reports, locations_within};
use clap::Parser;
use geo::Coord;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_LAT, ARG_LNG, ARG_RADIUS_KM, ARG_REPORTS, CliError, ENV_NEARBY_LAT, ENV_NEARBY_LNG,
    ENV_NEARBY_REPORTS, LAT_LIMIT, LNG_LIMIT, checked_coordinate, checked_radius,
    require_existing, write_json,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List geocoded reports with their title, address and icon \
                 key. With a center, only reports within the radius are \
                 listed; without one, every geocoded report is.",
    about = "List reported houses around a center"
)]
#[ortho_config(prefix = "CANDY")]
pub(crate) struct NearbyArgs {
    /// Path to the report export (JSON array of report rows).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reports: Option<Utf8PathBuf>,
    /// Longitude of the center, in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Latitude of the center, in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Search radius in kilometres (1 to 25, default 5).
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
}

impl NearbyArgs {
    fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    /// Path to the report export.
    pub(crate) reports: Utf8PathBuf,
    /// Center to filter around, if any.
    pub(crate) center: Option<Coord<f64>>,
    /// Search radius in kilometres.
    pub(crate) radius_km: f64,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let reports = args.reports.ok_or(CliError::MissingArgument {
            field: ARG_REPORTS,
            env: ENV_NEARBY_REPORTS,
        })?;
        let center = match (args.lng, args.lat) {
            (None, None) => None,
            (Some(lng), Some(lat)) => Some(Coord {
                x: checked_coordinate(lng, ARG_LNG, LNG_LIMIT)?,
                y: checked_coordinate(lat, ARG_LAT, LAT_LIMIT)?,
            }),
            (None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LNG,
                    env: ENV_NEARBY_LNG,
                });
            }
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_LAT,
                    env: ENV_NEARBY_LAT,
                });
            }
        };
        let radius_km = checked_radius(args.radius_km.unwrap_or(DEFAULT_RADIUS_KM))?;
        Ok(Self {
            reports,
            center,
            radius_km,
        })
    }
}

pub(crate) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &mut stdout)
}

pub(crate) fn run_nearby_with(args: NearbyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.reports, ARG_REPORTS)?;
    let locations = execute_nearby(&config)?;
    write_json(writer, &locations)
}

pub(crate) fn execute_nearby(config: &NearbyConfig) -> Result<Vec<ReportedLocation>, CliError> {
    let rows = load_reports(&config.reports)?;
    let locations = locations_within(&rows, config.center, config.radius_km);
    match config.center {
        Some(_) => info!(
            "{} report(s) within {} km",
            locations.len(),
            config.radius_km
        ),
        None => info!("{} geocoded report(s)", locations.len()),
    }
    Ok(locations)
}
