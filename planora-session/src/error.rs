//! Error types for the session module.

use thiserror::Error;

/// Session-specific errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Credential file could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Persisted credential JSON is malformed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
