//! Carfinder: Vehicle Model Search Library
//!
//! Builds queries against the public vehicle-model dataset, decodes the
//! response envelope into typed records, and exports them to JSON and CSV.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
