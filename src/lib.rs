//! Facade crate for the Candy Rush route planning engine.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! and the report export loader behind feature flags.
//!
//! # Examples
//! ```
//! use candy_rush::{CandyLocation, Preferences, plan_route};
//! use geo::Coord;
//!
//! let center = Coord { x: 174.77, y: -36.84 };
//! let houses = vec![CandyLocation::new(
//!     "1",
//!     Coord { x: 174.771, y: -36.841 },
//!     vec!["KitKat".to_owned()],
//! )];
//! let route = plan_route(Some(center), &houses, &Preferences::new().desiring("kitkat"), 5.0);
//! assert_eq!(route.map(|r| r.stops().len()), Some(1));
//! ```

#![forbid(unsafe_code)]

pub use candy_core::{
    CandyLabel, CandyLabelError, CandyLocation, DEFAULT_RADIUS_KM, DirectionsError,
    DirectionsProvider, EARTH_RADIUS_KM, LocationStore, MAX_RADIUS_KM, MAX_STOPS, MIN_RADIUS_KM,
    PlanRequest, PlanRequestValidationError, PreferenceScorer, Preferences, Route, RoutePlanner,
    Scorer, SearchArea, StraightLineDirections, haversine_km, stitch_path, wrap_coord,
    wrap_longitude,
};

#[cfg(feature = "planner-greedy")]
pub use candy_planner::{GreedyPlanner, GreedyPlannerConfig, plan_route};

#[cfg(feature = "reports-json")]
pub use candy_data::{
    MemoryLocationStore, ReportId, ReportLoadError, ReportRow, ReportedLocation, available_labels,
    candidates_from_reports, load_reports, locations_within, parse_reports,
};
