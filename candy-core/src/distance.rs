//! Great-circle distances between coordinates.

use geo::Coord;

/// Mean Earth radius used for every distance in the engine, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two WGS84 coordinates, in kilometres.
///
/// Coordinates are longitude-first (`x = longitude`, `y = latitude`) in
/// decimal degrees. Out-of-range inputs are not validated.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use candy_core::haversine_km;
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 0.0, y: 1.0 };
/// assert!((haversine_km(a, b) - 111.195).abs() < 1e-3);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let sin_d_lat = (d_lat / 2.0).sin();
    let sin_d_lng = (d_lng / 2.0).sin();
    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Wrap a longitude into `[-180, 180)` degrees.
///
/// Haversine distances ignore whole turns of longitude, so anything that
/// compares longitudes directly, such as a bounding-box test, must wrap first.
///
/// # Examples
/// ```
/// use candy_core::wrap_longitude;
///
/// assert_eq!(wrap_longitude(190.0), -170.0);
/// assert_eq!(wrap_longitude(180.0), -180.0);
/// assert_eq!(wrap_longitude(-36.5), -36.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "longitudes wrap with floating-point remainder"
)]
pub fn wrap_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// `coord` with its longitude wrapped by [`wrap_longitude`].
#[must_use]
pub fn wrap_coord(coord: Coord<f64>) -> Coord<f64> {
    Coord {
        x: wrap_longitude(coord.x),
        y: coord.y,
    }
}
