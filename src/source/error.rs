//! Error types for feed sources.

use thiserror::Error;

/// Errors that can occur when fetching the feed.
///
/// Every variant aborts the current cycle. Nothing is retried; the next
/// attempt happens on the next scheduled tick or manual fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with something other than 200 OK.
    #[error("Failed to fetch data. Status code: {0}")]
    Status(u16),

    /// Connection could not be established.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for response.
    #[error("Request timed out")]
    Timeout,

    /// Any other transport failure (TLS, body read, client setup).
    #[error("HTTP request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_code() {
        let err = FetchError::Status(503);
        assert_eq!(err.to_string(), "Failed to fetch data. Status code: 503");
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }
}
