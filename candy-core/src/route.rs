//! Suggested walking routes.
//!
//! A route is a pure output value: the starting center followed by the
//! houses to visit, in order. It is recomputed whenever the inputs change.

use geo::Coord;

/// Ordered waypoints, always starting at the search center.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use candy_core::Route;
///
/// let center = Coord { x: 174.77, y: -36.84 };
/// let stop = Coord { x: 174.771, y: -36.841 };
/// let route = Route::new(center, vec![stop]);
///
/// assert_eq!(route.center(), center);
/// assert_eq!(route.stops(), &[stop]);
/// assert_eq!(route.waypoints().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    waypoints: Vec<Coord<f64>>,
}

impl Route {
    /// Construct a route from the center and the stops in visiting order.
    #[must_use]
    pub fn new(center: Coord<f64>, stops: Vec<Coord<f64>>) -> Self {
        let mut waypoints = Vec::with_capacity(stops.len() + 1);
        waypoints.push(center);
        waypoints.extend(stops);
        Self { waypoints }
    }

    /// All waypoints, center first.
    #[must_use]
    pub fn waypoints(&self) -> &[Coord<f64>] {
        &self.waypoints
    }

    /// The search center the route starts from.
    #[must_use]
    pub fn center(&self) -> Coord<f64> {
        self.waypoints.first().copied().unwrap_or(Coord { x: 0.0, y: 0.0 })
    }

    /// The houses to visit, in order.
    #[must_use]
    pub fn stops(&self) -> &[Coord<f64>] {
        self.waypoints.get(1..).unwrap_or_default()
    }

    /// Waypoints as `[longitude, latitude]` pairs.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use candy_core::Route;
    ///
    /// let route = Route::new(Coord { x: 1.0, y: 2.0 }, Vec::new());
    /// assert_eq!(route.to_lng_lat(), vec![[1.0, 2.0]]);
    /// ```
    #[must_use]
    pub fn to_lng_lat(&self) -> Vec<[f64; 2]> {
        self.waypoints.iter().map(|c| [c.x, c.y]).collect()
    }
}
