//! Error types for the remote feed client.

use thiserror::Error;

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors that can occur talking to the feed API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The client cannot be built from the given configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transport-level failure (connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}
