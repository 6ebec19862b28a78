//! Directions provider trait and the straight-line fallback provider.

use geo::Coord;

use super::error::DirectionsError;

/// Fetch a walking path between two coordinates.
///
/// Implementers return the path as an ordered polyline, longitude first,
/// normally starting at `from` and ending at `to`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use candy_core::{DirectionsError, DirectionsProvider};
///
/// struct MidpointProvider;
///
/// impl DirectionsProvider for MidpointProvider {
///     fn walking_path(
///         &self,
///         from: Coord<f64>,
///         to: Coord<f64>,
///     ) -> Result<Vec<Coord<f64>>, DirectionsError> {
///         let mid = Coord { x: (from.x + to.x) / 2.0, y: (from.y + to.y) / 2.0 };
///         Ok(vec![from, mid, to])
///     }
/// }
///
/// let path = MidpointProvider
///     .walking_path(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 })?;
/// assert_eq!(path.len(), 3);
/// # Ok::<(), DirectionsError>(())
/// ```
pub trait DirectionsProvider {
    /// Return a walking polyline from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError`] when no path can be supplied.
    fn walking_path(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
    ) -> Result<Vec<Coord<f64>>, DirectionsError>;
}

/// Provider that joins every pair of points with a straight line.
///
/// Used when no routing service is configured.
#[derive(Debug, Default, Copy, Clone)]
pub struct StraightLineDirections;

impl DirectionsProvider for StraightLineDirections {
    fn walking_path(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
    ) -> Result<Vec<Coord<f64>>, DirectionsError> {
        Ok(vec![from, to])
    }
}
