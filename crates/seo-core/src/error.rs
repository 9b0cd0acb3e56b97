//! Error types for collaborator seams.

use thiserror::Error;

/// A route/parameter combination that cannot be turned into a URL.
///
/// Expected for some locales (e.g. a page that is not translated); callers
/// building alternate links skip the locale instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLinkError {
    /// No route with this name is registered.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// The parameters carry no `locale`.
    #[error("No locale given for route {route}")]
    MissingLocale { route: String },

    /// The route exists but has no URL pattern for the locale.
    #[error("Route {route} is not available in locale {locale}")]
    UnsupportedLocale { route: String, locale: String },

    /// A placeholder in the URL pattern has no matching parameter.
    #[error("Missing parameter '{param}' for route {route}")]
    MissingParam { route: String, param: String },

    /// The assembled URL is not valid.
    #[error("Invalid URL for route {route}: {reason}")]
    InvalidUrl { route: String, reason: String },
}

/// Invalid reference configuration (base URL, patterns).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The base URL cannot carry paths (e.g. `mailto:`).
    #[error("Base URL '{0}' cannot be used as a base")]
    CannotBeABase(String),
}
