//! Join per-segment walking paths into a single polyline.

use geo::Coord;
use log::warn;

use super::provider::DirectionsProvider;
use crate::Route;

/// Build a renderable path through every waypoint of `route`.
///
/// Each consecutive waypoint pair is requested from `provider`. Segments are
/// concatenated without repeating the joint point. A failed or empty segment
/// is replaced by a straight line between its endpoints.
///
/// Returns `None` when the route has fewer than two waypoints.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use candy_core::{Route, StraightLineDirections, stitch_path};
///
/// let route = Route::new(
///     Coord { x: 0.0, y: 0.0 },
///     vec![Coord { x: 1.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }],
/// );
/// let path = stitch_path(&StraightLineDirections, &route).expect("two legs");
/// assert_eq!(path, route.waypoints());
/// ```
pub fn stitch_path<P>(provider: &P, route: &Route) -> Option<Vec<Coord<f64>>>
where
    P: DirectionsProvider + ?Sized,
{
    let waypoints = route.waypoints();
    if waypoints.len() < 2 {
        return None;
    }

    let mut merged: Vec<Coord<f64>> = Vec::new();
    for (leg, pair) in waypoints.windows(2).enumerate() {
        let [from, to] = pair else {
            continue;
        };
        let segment = match provider.walking_path(*from, *to) {
            Ok(points) if !points.is_empty() => points,
            Ok(_) => {
                warn!("directions returned an empty path for leg {leg}; using a straight line");
                vec![*from, *to]
            }
            Err(err) => {
                warn!("directions failed for leg {leg}: {err}; using a straight line");
                vec![*from, *to]
            }
        };
        let skip = usize::from(!merged.is_empty());
        merged.extend(segment.into_iter().skip(skip));
    }
    Some(merged)
}
