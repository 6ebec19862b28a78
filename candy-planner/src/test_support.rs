//! Test-only utilities for `candy-planner`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use std::f64::consts::TAU;

use candy_core::{CandyLocation, EARTH_RADIUS_KM, Route, haversine_km};
use geo::Coord;

/// Place `count` houses evenly on a circle of `radius_km` around `center`.
///
/// Every house reports the same `labels`. Ids are the house's position on
/// the ring, starting at `"0"`.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use candy_core::haversine_km;
/// use candy_planner::test_support::ring;
///
/// let center = Coord { x: 174.77, y: -36.84 };
/// let houses = ring(center, 4, 2.0, &["kitkat"]);
/// assert_eq!(houses.len(), 4);
/// assert!(houses.iter().all(|h| haversine_km(center, h.location) < 2.01));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "destination point formula is floating-point trigonometry"
)]
pub fn ring(center: Coord<f64>, count: u32, radius_km: f64, labels: &[&str]) -> Vec<CandyLocation> {
    let angular = radius_km / EARTH_RADIUS_KM;
    let lat = center.y.to_radians();
    let lng = center.x.to_radians();
    (0..count)
        .map(|i| {
            let bearing = TAU * f64::from(i) / f64::from(count);
            let dest_lat =
                (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
            let dest_lng = lng
                + (bearing.sin() * angular.sin() * lat.cos())
                    .atan2(angular.cos() - lat.sin() * dest_lat.sin());
            CandyLocation::new(
                i.to_string(),
                Coord {
                    x: dest_lng.to_degrees(),
                    y: dest_lat.to_degrees(),
                },
                labels.iter().map(|label| (*label).to_owned()).collect(),
            )
        })
        .collect()
}

/// Whether every stop of `route` lies within `radius_km` of its center.
#[must_use]
pub fn stops_within(route: &Route, radius_km: f64) -> bool {
    let center = route.center();
    route
        .stops()
        .iter()
        .all(|stop| haversine_km(center, *stop) <= radius_km)
}
