use geo::Coord;

use crate::CandyLabel;

/// A house where candy handouts were reported.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Labels are kept exactly as reported; repeated labels are preserved
/// because scoring counts occurrences.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use candy_core::CandyLocation;
///
/// let house = CandyLocation::new(
///     "42",
///     Coord { x: 174.77, y: -36.84 },
///     vec!["KitKat".into(), "Mars".into()],
/// );
///
/// assert_eq!(house.id, "42");
/// assert_eq!(house.labels.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandyLocation {
    /// Identifier of the report the location came from.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Candy names reported at this house.
    pub labels: Vec<String>,
}

impl CandyLocation {
    /// Construct a `CandyLocation` with the provided labels.
    pub fn new(id: impl Into<String>, location: Coord<f64>, labels: Vec<String>) -> Self {
        Self {
            id: id.into(),
            location,
            labels,
        }
    }

    /// Construct a `CandyLocation` without labels.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use candy_core::CandyLocation;
    ///
    /// let house = CandyLocation::without_labels("7", Coord { x: 0.0, y: 0.0 });
    /// assert!(house.labels.is_empty());
    /// ```
    pub fn without_labels(id: impl Into<String>, location: Coord<f64>) -> Self {
        Self::new(id, location, Vec::new())
    }

    /// Iterate over the reported labels in normalised form.
    pub fn normalised_labels(&self) -> impl Iterator<Item = CandyLabel> + '_ {
        self.labels.iter().map(|raw| CandyLabel::new(raw))
    }
}
