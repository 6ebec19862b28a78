//! Test-only, in-memory `LocationStore` implementation and fixtures used by
//! unit and behaviour tests.

use geo::{Coord, Intersects, Rect};

use crate::{CandyLocation, DirectionsError, DirectionsProvider, LocationStore, wrap_coord};

/// In-memory `LocationStore` implementation used in tests.
///
/// The store performs a linear scan and is intended only for small datasets.
#[derive(Default, Debug)]
pub struct MemoryStore {
    locations: Vec<CandyLocation>,
}

impl MemoryStore {
    /// Create a store containing a single location.
    #[must_use]
    pub fn with_location(location: CandyLocation) -> Self {
        Self::with_locations(std::iter::once(location))
    }

    /// Create a store from a collection of locations.
    pub fn with_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = CandyLocation>,
    {
        Self {
            locations: locations.into_iter().collect(),
        }
    }
}

impl LocationStore for MemoryStore {
    fn get_locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = CandyLocation> + Send + '_> {
        let bbox = *bbox;
        Box::new(
            self.locations
                .iter()
                // `Intersects` treats boundary points as inside the rectangle.
                .filter(move |l| bbox.intersects(&wrap_coord(l.location)))
                .cloned(),
        )
    }
}

/// Build a `CandyLocation` at `(lng, lat)` with the given labels.
#[must_use]
pub fn house(id: &str, lng: f64, lat: f64, labels: &[&str]) -> CandyLocation {
    CandyLocation::new(
        id,
        Coord { x: lng, y: lat },
        labels.iter().map(|label| (*label).to_owned()).collect(),
    )
}

/// Deterministic `DirectionsProvider` that always fails.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnavailableDirections;

impl DirectionsProvider for UnavailableDirections {
    fn walking_path(
        &self,
        _from: Coord<f64>,
        _to: Coord<f64>,
    ) -> Result<Vec<Coord<f64>>, DirectionsError> {
        Err(DirectionsError::Service {
            message: "directions disabled in tests".to_owned(),
        })
    }
}
