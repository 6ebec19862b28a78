//! Plan command implementation for the Candy Rush CLI.

use std::collections::BTreeSet;
use std::io::Write;

use camino::Utf8PathBuf;
use candy_core::{
    CandyLabel, DEFAULT_RADIUS_KM, DirectionsProvider, PlanRequest, PlanRequestValidationError,
    PreferenceScorer, Preferences, Route, RoutePlanner, StraightLineDirections, stitch_path,
};
use candy_data::{MemoryLocationStore, load_reports};
use candy_planner::GreedyPlanner;
use clap::Parser;
use geo::Coord;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_LAT, ARG_LNG, ARG_PLAN_AVOID, ARG_PLAN_DESIRE, ARG_PLAN_WITH_PATH, ARG_RADIUS_KM,
    ARG_REPORTS, CliError, ENV_PLAN_LAT, ENV_PLAN_LNG, ENV_PLAN_REPORTS, LAT_LIMIT, LNG_LIMIT,
    checked_coordinate, require_existing, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walking route from a center through reported houses. \
                 Houses within the radius are ranked by how many desired \
                 candies they report minus how many avoided ones, and \
                 visited best first, nearest first on equal score.",
    about = "Suggest a visiting order for reported houses"
)]
#[ortho_config(prefix = "CANDY")]
pub(crate) struct PlanArgs {
    /// Path to the report export (JSON array of report rows).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reports: Option<Utf8PathBuf>,
    /// Longitude of the starting point, in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Latitude of the starting point, in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Search radius in kilometres (1 to 25, default 5).
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Candy to seek out. Repeat for several.
    #[arg(long = ARG_PLAN_DESIRE, value_name = "label")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) desire: Vec<String>,
    /// Candy to steer clear of. Repeat for several.
    #[arg(long = ARG_PLAN_AVOID, value_name = "label")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) avoid: Vec<String>,
    /// Also stitch a walkable path between the waypoints.
    #[arg(long = ARG_PLAN_WITH_PATH)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) with_path: bool,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the report export.
    pub(crate) reports: Utf8PathBuf,
    /// Starting point, longitude first.
    pub(crate) center: Coord<f64>,
    /// Search radius in kilometres.
    pub(crate) radius_km: f64,
    /// Desired and avoided candy.
    pub(crate) preferences: Preferences,
    /// Whether to stitch a walkable path.
    pub(crate) with_path: bool,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.reports, ARG_REPORTS)
    }

    fn request(&self) -> PlanRequest {
        PlanRequest {
            center: Some(self.center),
            radius_km: self.radius_km,
            preferences: self.preferences.clone(),
        }
    }
}

fn coordinate(
    value: Option<f64>,
    field: &'static str,
    env: &'static str,
    limit: f64,
) -> Result<f64, CliError> {
    let value = value.ok_or(CliError::MissingArgument { field, env })?;
    checked_coordinate(value, field, limit)
}

fn labels(values: &[String], field: &'static str) -> Result<BTreeSet<CandyLabel>, CliError> {
    values
        .iter()
        .map(|value| {
            value
                .parse::<CandyLabel>()
                .map_err(|source| CliError::InvalidLabel { field, source })
        })
        .collect()
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let reports = args.reports.ok_or(CliError::MissingArgument {
            field: ARG_REPORTS,
            env: ENV_PLAN_REPORTS,
        })?;
        let lng = coordinate(args.lng, ARG_LNG, ENV_PLAN_LNG, LNG_LIMIT)?;
        let lat = coordinate(args.lat, ARG_LAT, ENV_PLAN_LAT, LAT_LIMIT)?;
        let preferences = Preferences::from_sets(
            labels(&args.desire, ARG_PLAN_DESIRE)?,
            labels(&args.avoid, ARG_PLAN_AVOID)?,
        );
        let config = Self {
            reports,
            center: Coord { x: lng, y: lat },
            radius_km: args.radius_km.unwrap_or(DEFAULT_RADIUS_KM),
            preferences,
            with_path: args.with_path,
        };
        config.request().validate().map_err(|err| match err {
            PlanRequestValidationError::RadiusOutOfRange { radius_km } => {
                CliError::InvalidRadius { radius_km }
            }
            PlanRequestValidationError::ConflictingPreference { label } => {
                CliError::ConflictingPreference { label }
            }
        })?;
        Ok(config)
    }
}

/// JSON document printed by the `plan` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanOutput {
    /// Center followed by the stops, as `[lng, lat]` pairs, or `null`.
    pub(crate) waypoints: Option<Vec<[f64; 2]>>,
    /// Number of houses to visit.
    pub(crate) stops: usize,
    /// Stitched walking path, when requested and a route exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) path: Option<Vec<[f64; 2]>>,
}

impl PlanOutput {
    fn new(route: Option<&Route>, directions: Option<&dyn DirectionsProvider>) -> Self {
        let Some(route) = route else {
            return Self {
                waypoints: None,
                stops: 0,
                path: None,
            };
        };
        let path = directions
            .and_then(|provider| stitch_path(provider, route))
            .map(|coords| coords.into_iter().map(|c| [c.x, c.y]).collect());
        Self {
            waypoints: Some(route.to_lng_lat()),
            stops: route.stops().len(),
            path,
        }
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &StraightLineDirections, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    directions: &dyn DirectionsProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let output = execute_plan(&config, directions)?;
    write_json(writer, &output)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_plan(
    config: &PlanConfig,
    directions: &dyn DirectionsProvider,
) -> Result<PlanOutput, CliError> {
    let rows = load_reports(&config.reports)?;
    let store = MemoryLocationStore::from_reports(&rows);
    let planner = GreedyPlanner::new(store, PreferenceScorer);
    let route = planner.plan(&config.request());
    match &route {
        Some(route) => info!("planned a route with {} stop(s)", route.stops().len()),
        None => info!("no house within {} km matches the preferences", config.radius_km),
    }
    let directions = config.with_path.then_some(directions);
    Ok(PlanOutput::new(route.as_ref(), directions))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
