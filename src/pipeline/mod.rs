//! Pipeline module - builds the query, fetches and decodes results

pub mod criteria;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod query;
pub mod record;

pub use criteria::*;
pub use decode::*;
pub use error::*;
pub use fetch::*;
pub use query::*;
pub use record::*;

/// Fetch and decode the records matching an already built query.
///
/// Both failure kinds are fatal to a run and surface as [`PipelineError`].
pub fn search<F: Fetcher>(
    fetcher: &F,
    query: &QueryString,
) -> Result<Vec<VehicleRecord>, PipelineError> {
    let body = fetcher.fetch(query)?;
    let records = decode_response(&body)?;
    Ok(records)
}
