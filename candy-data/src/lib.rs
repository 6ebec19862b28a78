//! Report export loading for the Candy Rush engine.
//!
//! Responsibilities:
//! - Read the report export (a JSON array of report rows) from disk.
//! - Turn rows with coordinates into planner candidates.
//! - List geocoded reports around a center for browsing.
//! - Provide an in-memory `LocationStore` over those candidates.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `candy-core`).
//! - No network access; the export is produced elsewhere.

#![forbid(unsafe_code)]

mod reports;
mod store;

pub use reports::{
    ReportId, ReportLoadError, ReportRow, ReportedLocation, available_labels,
    candidates_from_reports, load_reports, locations_within, parse_reports,
};
pub use store::MemoryLocationStore;
