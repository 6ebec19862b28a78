//! Test helpers for writing report exports into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Two geocoded houses near central Auckland and one without coordinates.
pub(super) const SAMPLE_REPORTS: &str = r#"[
  {"reportId": 1, "latitude": -36.841, "longitude": 174.771,
   "address": "12 Queen Street", "candyNames": ["KitKat"],
   "reportedAt": "2025-10-31T18:04:00.000Z", "reporter": "+6421000001"},
  {"reportId": 2, "latitude": -36.85, "longitude": 174.78,
   "address": "3 Symonds Street", "candyNames": ["KitKat", "Mars"],
   "reportedAt": "2025-10-31T18:20:00.000Z", "reporter": null},
  {"reportId": 3, "latitude": null, "longitude": null,
   "address": null, "candyNames": ["Licorice"],
   "reportedAt": null, "reporter": null}
]"#;

pub(super) const CENTER_LNG: f64 = 174.77;
pub(super) const CENTER_LAT: f64 = -36.84;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding `reports.json`.
#[derive(Debug)]
pub(super) struct ReportsWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    reports: Utf8PathBuf,
}

impl ReportsWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let reports = root.join("reports.json");
        write_utf8(&reports, SAMPLE_REPORTS.as_bytes());
        Self {
            _dir: dir,
            root,
            reports,
        }
    }

    pub(super) fn reports(&self) -> &Utf8Path {
        &self.reports
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}
