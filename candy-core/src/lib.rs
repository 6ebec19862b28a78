//! Core domain types for the Candy Rush route planner.
//!
//! Reported houses ([`CandyLocation`]) are scored against a visitor's
//! [`Preferences`] and ordered into a [`Route`] by a [`RoutePlanner`].
//! Stores and directions services plug in through the [`LocationStore`] and
//! [`DirectionsProvider`] traits.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod area;
pub mod directions;
mod distance;
mod label;
mod location;
mod planner;
mod preferences;
mod route;
mod scorer;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use area::SearchArea;
pub use directions::{DirectionsError, DirectionsProvider, StraightLineDirections, stitch_path};
pub use distance::{EARTH_RADIUS_KM, haversine_km, wrap_coord, wrap_longitude};
pub use label::{CandyLabel, CandyLabelError};
pub use location::CandyLocation;
pub use planner::{
    DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MAX_STOPS, MIN_RADIUS_KM, PlanRequest,
    PlanRequestValidationError, RoutePlanner,
};
pub use preferences::Preferences;
pub use route::Route;
pub use scorer::{PreferenceScorer, Scorer};
pub use store::LocationStore;
