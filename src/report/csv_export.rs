//! CSV export of decoded vehicles

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::pipeline::{ExportError, VehicleRecord};

/// Header row of the exported file
pub const CSV_HEADER: [&str; 4] = ["Make", "Model", "Year", "Cylinders"];

/// Write `records` to `path` as CSV with a `Make,Model,Year,Cylinders` header.
///
/// Any existing file is truncated. Fields are quoted only when they contain
/// a delimiter, quote or newline.
pub fn export_csv(records: &[VehicleRecord], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::CannotCreateDestination {
        path: path.to_path_buf(),
        source,
    })?;

    let write_failure = |e: csv::Error| ExportError::WriteFailure {
        path: path.to_path_buf(),
        source: io::Error::from(e),
    };

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer.write_record(CSV_HEADER).map_err(write_failure)?;
    for record in records {
        writer
            .write_record([
                record.make.as_str(),
                record.model.as_str(),
                record.year.as_str(),
                record.cylinder_count.to_string().as_str(),
            ])
            .map_err(write_failure)?;
    }

    writer.flush().map_err(|source| ExportError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
