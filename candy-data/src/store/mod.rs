//! In-memory `LocationStore` over loaded report candidates.

use candy_core::{CandyLocation, LocationStore, wrap_coord};
use geo::{Intersects, Rect};

use crate::{ReportRow, candidates_from_reports};

/// `LocationStore` holding candidates in memory.
///
/// Queries perform a linear scan and yield locations in insertion order,
/// so planner tie-breaking follows the order of the report export.
///
/// # Examples
/// ```
/// use candy_core::LocationStore;
/// use candy_data::{MemoryLocationStore, parse_reports};
/// use geo::{Coord, Rect};
///
/// let rows = parse_reports(
///     r#"[{"reportId": 1, "latitude": -36.84, "longitude": 174.77, "candyNames": ["Mars"]},
///         {"reportId": 2, "latitude": null, "longitude": null, "candyNames": ["Twix"]}]"#,
/// )
/// .expect("valid export");
/// let store = MemoryLocationStore::from_reports(&rows);
/// assert_eq!(store.len(), 1);
///
/// let bbox = Rect::new(Coord { x: 174.0, y: -37.0 }, Coord { x: 175.0, y: -36.0 });
/// assert_eq!(store.get_locations_in_bbox(&bbox).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryLocationStore {
    locations: Vec<CandyLocation>,
}

impl MemoryLocationStore {
    /// Create a store from candidate locations.
    #[must_use]
    pub const fn new(locations: Vec<CandyLocation>) -> Self {
        Self { locations }
    }

    /// Create a store from report rows, skipping rows without coordinates.
    #[must_use]
    pub fn from_reports(rows: &[ReportRow]) -> Self {
        Self::new(candidates_from_reports(rows))
    }

    /// Number of stored locations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Return `true` when the store holds no locations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Stored locations in insertion order.
    #[must_use]
    pub fn locations(&self) -> &[CandyLocation] {
        &self.locations
    }
}

impl FromIterator<CandyLocation> for MemoryLocationStore {
    fn from_iter<I: IntoIterator<Item = CandyLocation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl LocationStore for MemoryLocationStore {
    fn get_locations_in_bbox(
        &self,
        bbox: &Rect<f64>,
    ) -> Box<dyn Iterator<Item = CandyLocation> + Send + '_> {
        let bbox = *bbox;
        Box::new(
            self.locations
                .iter()
                .filter(move |location| bbox.intersects(&wrap_coord(location.location)))
                .cloned(),
        )
    }
}
