//! In-memory feed source.
//!
//! Serves a fixed document (or a fixed failure) on every fetch. Useful for
//! embedding the pipeline without network access.

use super::{FeedSource, FetchError};

/// A feed source that replays the same response on every fetch.
///
/// # Example
///
/// ```
/// use swx_monitor::{FeedSource, FetchError, StaticSource};
///
/// let mut source = StaticSource::failing(FetchError::Status(503));
/// assert_eq!(source.fetch(), Err(FetchError::Status(503)));
/// assert_eq!(source.fetch_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticSource {
    response: Result<Vec<u8>, FetchError>,
    description: String,
    fetch_count: usize,
}

impl StaticSource {
    /// Create a source that always returns `body`.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Ok(body.into()),
            description: "static: in-memory document".to_string(),
            fetch_count: 0,
        }
    }

    /// Create a source that always fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            description: "static: failing source".to_string(),
            fetch_count: 0,
        }
    }

    /// Replace the response served by subsequent fetches.
    pub fn set_response(&mut self, response: Result<Vec<u8>, FetchError>) {
        self.response = response;
    }

    /// Number of fetches performed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }
}

impl FeedSource for StaticSource {
    fn fetch(&mut self) -> Result<Vec<u8>, FetchError> {
        self.fetch_count += 1;
        self.response.clone()
    }

    fn description(&self) -> &str {
        &self.description
    }
}
