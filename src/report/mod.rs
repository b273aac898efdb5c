//! Report module - console listing, file exports and run summary

pub mod csv_export;
pub mod export;
pub mod json_export;
pub mod listing;
pub mod summary;

pub use csv_export::*;
pub use export::*;
pub use json_export::*;
pub use listing::*;
pub use summary::*;
