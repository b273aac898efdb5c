//! Error types for the search pipeline.
//!
//! Fetch and decode failures end a run. Export failures are reported one by
//! one and never stop the other exporter. Criteria errors come from input
//! validation before any request is made.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while talking to the remote API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a complete response (DNS, connect,
    /// timeout, truncated body).
    #[error("failed to fetch data from external API: {0}")]
    Transport(String),

    /// The API answered with a non-success HTTP status.
    #[error("external API returned an error: {0}")]
    RemoteStatus(u16),
}

/// Errors raised while turning a response body into records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("failed to parse JSON: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The body is JSON but has no `records` array at the top level.
    #[error("invalid JSON structure from API: {0}")]
    UnexpectedShape(String),
}

/// Errors raised by a single exporter.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination file could not be created or truncated.
    #[error("failed to create {}: {source}", .path.display())]
    CannotCreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination was opened but writing to it failed.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Filter values outside what the API accepts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange { year: u32, min: u32, max: u32 },

    #[error("{0} cylinders is not a supported option")]
    UnsupportedCylinders(u32),

    #[error("result limit {limit} exceeds the maximum of {max}")]
    LimitTooLarge { limit: u32, max: u32 },

    #[error("unknown sort field '{0}' (expected make, model, year or cylinders)")]
    UnknownSortField(String),
}

/// Fatal errors of a fetch-then-decode search.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
