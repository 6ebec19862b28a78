//! Focused unit tests covering the nearby command.

use super::helpers::{CENTER_LAT, CENTER_LNG, ReportsWorkspace};
use super::nearby::{NearbyArgs, NearbyConfig, execute_nearby, run_nearby_with};
use super::*;
use candy_data::ReportedLocation;
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> ReportsWorkspace {
    ReportsWorkspace::new()
}

fn args_for(workspace: &ReportsWorkspace) -> NearbyArgs {
    NearbyArgs {
        reports: Some(workspace.reports().to_path_buf()),
        lng: Some(CENTER_LNG),
        lat: Some(CENTER_LAT),
        radius_km: None,
    }
}

fn listed_ids(locations: &[ReportedLocation]) -> Vec<&str> {
    locations.iter().map(|location| location.id.as_str()).collect()
}

#[rstest]
fn converting_without_reports_errors() {
    let err = NearbyConfig::try_from(NearbyArgs::default()).expect_err("missing reports");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REPORTS);
            assert_eq!(env, ENV_NEARBY_REPORTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn center_is_optional(workspace: ReportsWorkspace) {
    let args = NearbyArgs {
        lng: None,
        lat: None,
        ..args_for(&workspace)
    };
    let config = NearbyConfig::try_from(args).expect("config should build");
    assert_eq!(config.center, None);
    assert_eq!(config.radius_km, candy_core::DEFAULT_RADIUS_KM);
}

#[rstest]
#[case::lng_only(Some(CENTER_LNG), None, ARG_LAT, ENV_NEARBY_LAT)]
#[case::lat_only(None, Some(CENTER_LAT), ARG_LNG, ENV_NEARBY_LNG)]
fn half_a_center_is_rejected(
    workspace: ReportsWorkspace,
    #[case] lng: Option<f64>,
    #[case] lat: Option<f64>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = NearbyArgs {
        lng,
        lat,
        ..args_for(&workspace)
    };
    match NearbyConfig::try_from(args).expect_err("half a center") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(0.5)]
#[case(30.0)]
fn radius_outside_slider_is_rejected(workspace: ReportsWorkspace, #[case] radius_km: f64) {
    let args = NearbyArgs {
        radius_km: Some(radius_km),
        ..args_for(&workspace)
    };
    let err = NearbyConfig::try_from(args).expect_err("radius out of range");
    assert!(matches!(err, CliError::InvalidRadius { .. }), "{err:?}");
}

#[rstest]
fn latitude_out_of_range_is_rejected(workspace: ReportsWorkspace) {
    let args = NearbyArgs {
        lat: Some(95.0),
        ..args_for(&workspace)
    };
    match NearbyConfig::try_from(args).expect_err("latitude out of range") {
        CliError::InvalidCoordinate { field, .. } => assert_eq!(field, ARG_LAT),
        other => panic!("expected InvalidCoordinate, found {other:?}"),
    }
}

#[rstest]
#[case::small_radius(Some(1.0), vec!["1"])]
#[case::default_radius(None, vec!["1", "2"])]
fn lists_reports_within_radius(
    workspace: ReportsWorkspace,
    #[case] radius_km: Option<f64>,
    #[case] expected: Vec<&str>,
) {
    let args = NearbyArgs {
        radius_km,
        ..args_for(&workspace)
    };
    let config = NearbyConfig::try_from(args).expect("config should build");
    let locations = execute_nearby(&config).expect("export should load");
    assert_eq!(listed_ids(&locations), expected);
}

#[rstest]
fn prints_display_fields_as_json(workspace: ReportsWorkspace) {
    let mut stdout = Vec::new();
    run_nearby_with(args_for(&workspace), &mut stdout).expect("nearby should print");

    let locations: Vec<ReportedLocation> =
        serde_json::from_slice(&stdout).expect("output should be a JSON array");
    let second = locations.get(1).expect("two reports listed");
    assert_eq!(second.title, "KitKat, Mars");
    assert_eq!(second.icon_key, "kitkat");
    assert_eq!(second.address.as_deref(), Some("3 Symonds Street"));
    assert_eq!(second.coord, [174.78, -36.85]);
}
