//! Decoded vehicle record

use serde::{Deserialize, Serialize};

/// One vehicle model returned by the API.
///
/// `year` stays text because the dataset publishes it as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub year: String,
    #[serde(rename = "cylinders")]
    pub cylinder_count: i64,
}

impl VehicleRecord {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: impl Into<String>,
        cylinder_count: i64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year: year.into(),
            cylinder_count,
        }
    }

    /// Console line for this record
    pub fn summary_line(&self) -> String {
        format!(
            "Make: {}, Model: {}, Year: {}, Cylinders: {}",
            self.make, self.model, self.year, self.cylinder_count
        )
    }
}
