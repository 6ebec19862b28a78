use geo::Coord;
use thiserror::Error;

use crate::{Preferences, Route};

/// Search radius used when the caller does not pick one, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;
/// Smallest radius the map UI offers, in kilometres.
pub const MIN_RADIUS_KM: f64 = 1.0;
/// Largest radius the map UI offers, in kilometres.
pub const MAX_RADIUS_KM: f64 = 25.0;
/// Most stops a route may contain, excluding the center.
///
/// Matches the waypoint limit of common walking-directions services.
pub const MAX_STOPS: usize = 25;

/// Parameters for a route planning request.
///
/// The request captures the search center (absent until the visitor is
/// located or picks an address), the radius in kilometres and the candy
/// preferences.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use candy_core::{PlanRequest, Preferences};
///
/// let request = PlanRequest {
///     center: Some(Coord { x: 174.77, y: -36.84 }),
///     radius_km: 5.0,
///     preferences: Preferences::new().desiring("kitkat"),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Start location for the walk, longitude first.
    pub center: Option<Coord<f64>>,
    /// Search radius around the center in kilometres.
    pub radius_km: f64,
    /// Candy the visitor wants and avoids.
    pub preferences: Preferences,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            center: None,
            radius_km: DEFAULT_RADIUS_KM,
            preferences: Preferences::new(),
        }
    }
}

/// Detailed reasons a [`PlanRequest`] is rejected by
/// [`PlanRequest::validate`].
///
/// Planners never call this themselves; it exists for front ends that want to
/// hold requests to the ranges the map UI offers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestValidationError {
    /// The radius fell outside the supported range.
    #[error("radius must be between 1 and 25 km, got {radius_km}")]
    RadiusOutOfRange {
        /// Radius supplied by the caller.
        radius_km: f64,
    },
    /// The same label was both desired and avoided.
    #[error("candy label '{label}' cannot be both desired and avoided")]
    ConflictingPreference {
        /// The label found in both sets.
        label: String,
    },
}

impl PlanRequest {
    /// Check the radius range and preference disjointness.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.radius_km) {
            return Err(PlanRequestValidationError::RadiusOutOfRange {
                radius_km: self.radius_km,
            });
        }
        if let Some(label) = self.preferences.overlapping().next() {
            return Err(PlanRequestValidationError::ConflictingPreference {
                label: label.to_string(),
            });
        }
        Ok(())
    }
}

/// Propose a visiting order for reported candy locations.
///
/// Planning is total: `None` means no route is worth proposing (no center,
/// no preferences, or nothing nearby that matches), never a failure.
/// Planners must be `Send + Sync` to operate safely across threads.
pub trait RoutePlanner: Send + Sync {
    /// Plan a route for the request.
    fn plan(&self, request: &PlanRequest) -> Option<Route>;
}
