//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Local store failure.
    #[error("store error: {0}")]
    Store(#[from] feedstack_store::StoreError),

    /// Remote API failure.
    #[error("remote error: {0}")]
    Remote(#[from] feedstack_remote::RemoteError),

    /// A blocking task was cancelled or panicked.
    #[error("task failed: {0}")]
    Task(String),
}
