//! Bounding rectangles around a search circle.
//!
//! Stores index locations in lon/lat space, so the planner asks them for
//! every location inside the rectangle(s) enclosing the search circle and
//! then applies the exact haversine test. The rectangles must never cut off
//! a point whose haversine distance is within the radius.

use std::f64::consts::FRAC_PI_2;

use geo::{Coord, Intersects, Rect};

use crate::distance::{EARTH_RADIUS_KM, wrap_coord, wrap_longitude};

/// Padding applied to every edge, in degrees.
const EDGE_PADDING_DEG: f64 = 1e-9;

/// One or two lon/lat rectangles enclosing a search circle.
///
/// Circles that straddle the antimeridian are split into two rectangles, one
/// on each side, so every rectangle satisfies `min.x <= max.x`. Rectangles
/// span longitudes in `[-180, 180]`; coordinates are wrapped before they are
/// tested against them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use candy_core::SearchArea;
///
/// let area = SearchArea::around(Coord { x: 174.77, y: -36.84 }, 5.0);
/// assert_eq!(area.rects().len(), 1);
/// assert!(area.contains(Coord { x: 174.78, y: -36.85 }));
/// assert!(!area.contains(Coord { x: 175.5, y: -36.84 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArea {
    rects: Vec<Rect<f64>>,
}

impl SearchArea {
    /// Enclose every point within `radius_km` of `center`.
    ///
    /// A non-positive radius yields a degenerate rectangle at the center.
    /// The center's longitude may lie outside `[-180, 180)`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "spherical cap bounds are floating-point trigonometry"
    )]
    pub fn around(center: Coord<f64>, radius_km: f64) -> Self {
        let angular = (radius_km / EARTH_RADIUS_KM).max(0.0);
        let lat = center.y.to_radians();
        let min_lat = lat - angular;
        let max_lat = lat + angular;

        if min_lat <= -FRAC_PI_2 || max_lat >= FRAC_PI_2 {
            return Self::full_longitude(min_lat.to_degrees(), max_lat.to_degrees());
        }

        let half_width = (angular.sin() / lat.cos()).asin().to_degrees() + EDGE_PADDING_DEG;
        if half_width >= 180.0 {
            return Self::full_longitude(min_lat.to_degrees(), max_lat.to_degrees());
        }

        let min_y = min_lat.to_degrees() - EDGE_PADDING_DEG;
        let max_y = max_lat.to_degrees() + EDGE_PADDING_DEG;
        let center_x = wrap_longitude(center.x);
        let min_x = center_x - half_width;
        let max_x = center_x + half_width;

        let rects = if min_x < -180.0 {
            vec![
                lon_lat_rect(min_x + 360.0, 180.0, min_y, max_y),
                lon_lat_rect(-180.0, max_x, min_y, max_y),
            ]
        } else if max_x > 180.0 {
            vec![
                lon_lat_rect(min_x, 180.0, min_y, max_y),
                lon_lat_rect(-180.0, max_x - 360.0, min_y, max_y),
            ]
        } else {
            vec![lon_lat_rect(min_x, max_x, min_y, max_y)]
        };
        Self { rects }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "latitude bounds are padded in degrees"
    )]
    fn full_longitude(min_lat_deg: f64, max_lat_deg: f64) -> Self {
        let min_y = (min_lat_deg - EDGE_PADDING_DEG).max(-90.0);
        let max_y = (max_lat_deg + EDGE_PADDING_DEG).min(90.0);
        Self {
            rects: vec![lon_lat_rect(-180.0, 180.0, min_y, max_y)],
        }
    }

    /// Rectangles making up the area.
    #[must_use]
    pub fn rects(&self) -> &[Rect<f64>] {
        &self.rects
    }

    /// Return `true` when any rectangle contains the coordinate.
    ///
    /// Boundary points count as inside. The longitude is wrapped first.
    #[must_use]
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        let wrapped = wrap_coord(coord);
        self.rects.iter().any(|rect| rect.intersects(&wrapped))
    }
}

fn lon_lat_rect(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Rect<f64> {
    Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y })
}
