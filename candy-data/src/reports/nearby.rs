//! Browsing reported houses around a center.

use candy_core::haversine_km;
use geo::Coord;
use log::debug;
use serde::{Deserialize, Serialize};

use super::ReportRow;

/// A geocoded report as shown on the map.
///
/// Serialises with camelCase keys, like the export it comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedLocation {
    /// Report identifier as text.
    pub id: String,
    /// Position as `[longitude, latitude]`.
    pub coord: [f64; 2],
    /// Display title, see [`ReportRow::title`].
    pub title: String,
    /// Street address, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Marker icon key, see [`ReportRow::icon_key`].
    pub icon_key: String,
    /// Candy names as reported.
    pub candy_names: Vec<String>,
    /// When the report was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<String>,
    /// Who made the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
}

impl ReportRow {
    /// Browse entry for this row, or `None` without coordinates.
    #[must_use]
    pub fn to_reported_location(&self) -> Option<ReportedLocation> {
        self.coordinate().map(|coord| ReportedLocation {
            id: self.report_id.to_string(),
            coord: [coord.x, coord.y],
            title: self.title(),
            address: self.address.clone(),
            icon_key: self.icon_key(),
            candy_names: self.candy_names.clone(),
            reported_at: self.reported_at.clone(),
            reporter: self.reporter.clone(),
        })
    }
}

/// Geocoded reports within `radius_km` of `center`, in export order.
///
/// Without a center every geocoded report is returned. Distances use
/// [`haversine_km`] and the boundary is inclusive.
///
/// # Examples
/// ```
/// use candy_data::{locations_within, parse_reports};
/// use geo::Coord;
///
/// let rows = parse_reports(
///     r#"[{"reportId": 1, "latitude": -36.841, "longitude": 174.771, "candyNames": ["Mars"]},
///         {"reportId": 2, "latitude": -36.0, "longitude": 174.0, "candyNames": ["Twix"]}]"#,
/// )
/// .expect("valid export");
///
/// let near = locations_within(&rows, Some(Coord { x: 174.77, y: -36.84 }), 5.0);
/// assert_eq!(near.len(), 1);
/// assert_eq!(near[0].title, "Mars");
/// assert_eq!(locations_within(&rows, None, 5.0).len(), 2);
/// ```
#[must_use]
pub fn locations_within(
    rows: &[ReportRow],
    center: Option<Coord<f64>>,
    radius_km: f64,
) -> Vec<ReportedLocation> {
    let locations: Vec<ReportedLocation> = rows
        .iter()
        .filter(|row| match (center, row.coordinate()) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(origin), Some(coord)) => haversine_km(origin, coord) <= radius_km,
        })
        .filter_map(ReportRow::to_reported_location)
        .collect();
    debug!(
        "{} of {} report(s) shown within {radius_km} km",
        locations.len(),
        rows.len()
    );
    locations
}
