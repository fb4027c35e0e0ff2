//! Error types for the view engine.

use thiserror::Error;

/// View-engine-specific errors.
///
/// The pipeline itself absorbs bad data (malformed fields degrade to empty
/// matches, out-of-range pages yield empty slices); errors are reserved for
/// invalid API use.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Page size must be at least 1.
    #[error("invalid page size: {0}")]
    InvalidPageSize(usize),
}

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;
