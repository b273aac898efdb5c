//! HTTP transport for dataset queries

use std::io::Read;
use std::time::Duration;

use tracing::{debug, warn};

use super::error::FetchError;
use super::query::QueryString;

/// Complete, undecoded response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBody(Vec<u8>);

impl RawBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for RawBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for RawBody {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

/// Something that can execute a built query and hand back the body
pub trait Fetcher {
    fn fetch(&self, query: &QueryString) -> Result<RawBody, FetchError>;
}

/// Blocking HTTP GET through a `ureq` agent.
///
/// One request per call, no retries. The body is buffered in full.
#[derive(Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Fetcher using the transport's default timeouts
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Fetcher with an overall per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, query: &QueryString) -> Result<RawBody, FetchError> {
        debug!(url = %query, "sending request");

        let response = match self.agent.get(query.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::RemoteStatus(code)),
            Err(ureq::Error::Transport(transport)) => {
                return Err(FetchError::Transport(transport.to_string()))
            }
        };

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::RemoteStatus(status));
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Transport(format!("failed to read response body: {}", e)))?;

        let body = RawBody(body);
        if body.is_empty() {
            warn!(status, "response body is empty");
        }
        debug!(status, bytes = body.len(), "response received");
        Ok(body)
    }
}
