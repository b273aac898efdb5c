//! JSON export of decoded vehicles

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::pipeline::{ExportError, VehicleRecord};

/// Write `records` to `path` as a pretty-printed JSON array.
///
/// Any existing file is truncated. Each object carries the keys `make`,
/// `model`, `year` and `cylinders`.
///
/// # Arguments
/// * `records` - Vehicles in API order
/// * `path` - Destination file
pub fn export_json(records: &[VehicleRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::CannotCreateDestination {
        path: path.to_path_buf(),
        source,
    })?;

    let write_failure = |source: io::Error| ExportError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| write_failure(io::Error::from(e)))?;
    writer.flush().map_err(write_failure)?;

    Ok(())
}
