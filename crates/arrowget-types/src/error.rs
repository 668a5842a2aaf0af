//! Error types for arrowget.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for arrowget operations.
pub type Result<T> = std::result::Result<T, ArrowgetError>;

/// Errors that can end a transfer.
#[derive(Error, Debug)]
pub enum ArrowgetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server answered with a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Invalid endpoint URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The IPC stream could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ArrowgetError {
    /// Returns true if the failure happened while decoding the stream body
    /// rather than on the network.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
