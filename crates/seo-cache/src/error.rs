//! Cache error types.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors reported by a cache store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backing store is unreachable or refused the connection.
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    /// A store operation failed.
    #[error("cache operation `{operation}` failed: {reason}")]
    Operation {
        operation: &'static str,
        reason: String,
    },
}

impl CacheError {
    /// Shorthand for [`CacheError::Operation`].
    pub fn operation(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Operation {
            operation,
            reason: reason.into(),
        }
    }
}
