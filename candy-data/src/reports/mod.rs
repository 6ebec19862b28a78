//! Rows of the report export and their conversion into candidates.

mod load;
mod nearby;

use std::collections::BTreeSet;
use std::fmt;

use candy_core::{CandyLabel, CandyLocation};
use geo::Coord;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};

pub use load::{ReportLoadError, load_reports, parse_reports};
pub use nearby::{ReportedLocation, locations_within};

/// Title shown for a report without candy names.
const FALLBACK_TITLE: &str = "Candy";
/// Icon key used for a report without candy names.
const FALLBACK_ICON_KEY: &str = "candy";

/// Identifier of a report, as numeric or textual JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportId {
    /// Numeric database key.
    Number(i64),
    /// Opaque textual key.
    Text(String),
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// One entry of the report export.
///
/// # Examples
/// ```
/// use candy_data::parse_reports;
///
/// let rows = parse_reports(
///     r#"[{"reportId": 7, "latitude": -36.84, "longitude": 174.77,
///          "candyNames": ["Peanut Butter Cups", "Mars"]}]"#,
/// )
/// .expect("valid export");
/// let row = &rows[0];
/// assert_eq!(row.title(), "Peanut Butter Cups, Mars");
/// assert_eq!(row.icon_key(), "peanut-butter-cups");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Report identifier.
    pub report_id: ReportId,
    /// Latitude of the reported house, if geocoded.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the reported house, if geocoded.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Street address of the house.
    #[serde(default)]
    pub address: Option<String>,
    /// Candy names as reported. Null entries in the export are dropped.
    #[serde(default, deserialize_with = "names_without_nulls")]
    pub candy_names: Vec<String>,
    /// When the report was made, as an ISO 8601 string.
    #[serde(default)]
    pub reported_at: Option<String>,
    /// Who made the report.
    #[serde(default)]
    pub reporter: Option<String>,
}

fn names_without_nulls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(names.unwrap_or_default().into_iter().flatten().collect())
}

impl ReportRow {
    /// House coordinate, longitude first, when both parts are present.
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coord<f64>> {
        match (self.longitude, self.latitude) {
            (Some(x), Some(y)) => Some(Coord { x, y }),
            _ => None,
        }
    }

    /// Display title: the candy names joined by `", "`.
    #[must_use]
    pub fn title(&self) -> String {
        if self.candy_names.is_empty() {
            FALLBACK_TITLE.to_owned()
        } else {
            self.candy_names.join(", ")
        }
    }

    /// Marker icon key derived from the first candy name.
    #[must_use]
    pub fn icon_key(&self) -> String {
        self.candy_names
            .first()
            .map_or_else(|| FALLBACK_ICON_KEY.to_owned(), |name| {
                CandyLabel::new(name).icon_key()
            })
    }

    /// Convert to a planner candidate, or `None` without coordinates.
    #[must_use]
    pub fn to_candidate(&self) -> Option<CandyLocation> {
        self.coordinate().map(|location| {
            CandyLocation::new(
                self.report_id.to_string(),
                location,
                self.candy_names.clone(),
            )
        })
    }
}

/// Convert rows into planner candidates, skipping rows without coordinates.
///
/// Row order is preserved, which keeps planner tie-breaking stable.
#[must_use]
pub fn candidates_from_reports(rows: &[ReportRow]) -> Vec<CandyLocation> {
    let candidates: Vec<CandyLocation> = rows.iter().filter_map(ReportRow::to_candidate).collect();
    let skipped = rows.len().saturating_sub(candidates.len());
    if skipped > 0 {
        warn!("skipped {skipped} report(s) without coordinates");
    }
    debug!("loaded {} candidate location(s)", candidates.len());
    candidates
}

/// Sorted, de-duplicated candy names across all rows, as reported.
#[must_use]
pub fn available_labels(rows: &[ReportRow]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.candy_names.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
