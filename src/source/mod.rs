//! Feed source abstraction for fetching the raw space-weather document.
//!
//! The production source is [`HttpSource`], which issues one blocking GET
//! against the fixed [`FEED_URL`]. [`StaticSource`] serves canned bytes (or a
//! canned failure) and is used by library consumers and tests.

mod error;
mod http;
mod memory;

pub use error::FetchError;
pub use http::HttpSource;
pub use memory::StaticSource;

#[cfg(test)]
pub(crate) use http::test_server;

use std::fmt::Debug;

/// The solar-terrestrial XML feed. Not configurable.
pub const FEED_URL: &str = "https://www.hamqsl.com/solarxml.php";

/// Trait for fetching the raw feed document.
///
/// # Example
///
/// ```
/// use swx_monitor::{FeedSource, StaticSource};
///
/// let mut source = StaticSource::new(b"<solar><solarflux>120</solarflux></solar>".to_vec());
/// let bytes = source.fetch().unwrap();
/// assert!(!bytes.is_empty());
/// ```
pub trait FeedSource: Send + Debug {
    /// Fetch the document body.
    ///
    /// Blocks for the duration of the request. A non-200 status or any
    /// transport failure is returned as a [`FetchError`].
    fn fetch(&mut self) -> Result<Vec<u8>, FetchError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used in log records and the JSON report.
    fn description(&self) -> &str;
}
