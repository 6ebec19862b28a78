//! Data access traits for reported candy locations.
//!
//! The `LocationStore` trait defines a read-only interface for retrieving
//! [`CandyLocation`] values. Planners query it with the rectangles of a
//! [`SearchArea`](crate::SearchArea) and apply the exact distance test
//! themselves.

use geo::Rect;

use crate::CandyLocation;

/// Read-only access to reported candy locations.
///
/// The bounding box uses WGS84 coordinates (`x = longitude`, `y = latitude`).
///
/// # Examples
///
/// ```rust
/// use geo::{Coord, Rect, Intersects};
/// use candy_core::{CandyLocation, LocationStore, wrap_coord};
///
/// struct VecStore {
///     houses: Vec<CandyLocation>,
/// }
///
/// impl LocationStore for VecStore {
///     fn get_locations_in_bbox(
///         &self,
///         bbox: &Rect<f64>,
///     ) -> Box<dyn Iterator<Item = CandyLocation> + Send + '_> {
///         let bbox = *bbox;
///         Box::new(
///             self.houses
///                 .iter()
///                 // `Intersects` treats boundary points as inside the rectangle.
///                 .filter(move |h| bbox.intersects(&wrap_coord(h.location)))
///                 .cloned(),
///         )
///     }
/// }
///
/// let house = CandyLocation::without_labels("1", Coord { x: 0.0, y: 0.0 });
/// let store = VecStore { houses: vec![house.clone()] };
/// let bbox = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });
///
/// let found: Vec<_> = store.get_locations_in_bbox(&bbox).collect();
/// assert_eq!(found, vec![house]);
/// ```
pub trait LocationStore {
    /// Return all locations that fall within the provided bounding box.
    ///
    /// Coordinates use WGS84 with axis order (longitude, latitude) in
    /// degrees. The rectangle is axis-aligned in lon/lat space and
    /// `Rect::new` normalises corners so that `min <= max` on both axes.
    ///
    /// Antimeridian note: this method does not model regions that cross the
    /// antimeridian. [`SearchArea`](crate::SearchArea) already splits such
    /// regions into two rectangles.
    ///
    /// Containment includes boundary points, and a location's longitude is
    /// compared after [`wrap_coord`](crate::wrap_coord), so a house recorded a
    /// whole turn away is still found. Locations are yielded with their
    /// coordinates as stored, in a stable order so planning stays
    /// deterministic.
    fn get_locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = CandyLocation> + Send + '_>;
}
