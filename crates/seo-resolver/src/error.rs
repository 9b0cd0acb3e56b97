//! Resolver error types.

use seo_cache::CacheError;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors surfaced by [`crate::MetaResolver`].
///
/// Missing metadata is never an error; it resolves to `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolver was used before the router matched the request.
    #[error("Can not {operation}: no request has been matched. Register the resolver with the router before rendering.")]
    NotBound { operation: &'static str },

    /// The cache store failed while invalidating.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl ResolveError {
    /// Whether this is a precondition violation in the host integration.
    pub fn is_not_bound(&self) -> bool {
        matches!(self, Self::NotBound { .. })
    }
}
