//! Router integration hook.

use crate::context::MatchParams;

/// Listener a router notifies after it has matched a request.
///
/// Implementors bind request-scoped state here; the router calls it at most
/// once per request, before any presentation code runs.
pub trait AfterMatch {
    /// Called with the matched path (no query string) and route parameters.
    fn matched(&mut self, path: &str, params: MatchParams);
}
