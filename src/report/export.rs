//! Running both exporters for a finished search

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::csv_export::export_csv;
use super::json_export::export_json;
use crate::pipeline::{ExportError, VehicleRecord};

/// Default JSON file name
pub const DEFAULT_JSON_FILE: &str = "vehicles.json";

/// Default CSV file name
pub const DEFAULT_CSV_FILE: &str = "vehicles.csv";

/// Destinations for the two export formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl OutputPaths {
    /// Both default file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            json: dir.join(DEFAULT_JSON_FILE),
            csv: dir.join(DEFAULT_CSV_FILE),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir(Path::new("."))
    }
}

/// Per-format result of [`export_all`]
#[derive(Debug)]
pub struct ExportOutcome {
    pub json: Result<PathBuf, ExportError>,
    pub csv: Result<PathBuf, ExportError>,
}

impl ExportOutcome {
    /// Paths that were written successfully
    pub fn written(&self) -> Vec<&Path> {
        [&self.json, &self.csv]
            .into_iter()
            .filter_map(|r| r.as_ref().ok().map(PathBuf::as_path))
            .collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.json.is_ok() && self.csv.is_ok()
    }
}

/// Run the JSON exporter and then the CSV exporter.
///
/// Each runs regardless of the other's outcome; neither error is raised,
/// both are returned for the caller to report.
pub fn export_all(records: &[VehicleRecord], paths: &OutputPaths) -> ExportOutcome {
    let json = export_json(records, &paths.json).map(|_| paths.json.clone());
    log_outcome("JSON", &json);

    let csv = export_csv(records, &paths.csv).map(|_| paths.csv.clone());
    log_outcome("CSV", &csv);

    ExportOutcome { json, csv }
}

fn log_outcome(kind: &str, outcome: &Result<PathBuf, ExportError>) {
    match outcome {
        Ok(path) => info!(kind, path = %path.display(), "export written"),
        Err(e) => warn!(kind, error = %e, "export failed"),
    }
}
