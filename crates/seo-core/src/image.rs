//! Open Graph image lookup seam.

use std::collections::{BTreeMap, HashMap};

use url::Url;

use crate::error::ConfigError;
use crate::link::{expand_pattern, parse_base_url};

/// Supplies an absolute Open Graph image URL for a route.
pub trait ImageResolver: Send + Sync {
    /// Resolve the image for `route` (`Module:Presenter:action` or
    /// `Presenter:action`).
    ///
    /// `params` are the router parameters without `presenter` and `action`.
    /// Returns `None` when the page has no image.
    fn resolve(&self, route: &str, params: &BTreeMap<String, String>) -> Option<String>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str, &BTreeMap<String, String>) -> Option<String> + Send + Sync,
{
    fn resolve(&self, route: &str, params: &BTreeMap<String, String>) -> Option<String> {
        self(route, params)
    }
}

/// One image URL pattern per route, e.g. `/images/og/{slug}.png`.
///
/// Routes without a pattern, or whose pattern needs a parameter the request
/// lacks, have no image.
#[derive(Debug, Clone)]
pub struct PatternImageResolver {
    base: Url,
    patterns: HashMap<String, String>,
}

impl PatternImageResolver {
    /// Create an empty resolver rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base: parse_base_url(base_url)?,
            patterns: HashMap::new(),
        })
    }

    /// Register an image pattern for a route.
    pub fn with_pattern(mut self, route: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.patterns.insert(route.into(), pattern.into());
        self
    }

    /// Number of routes with an image pattern.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl ImageResolver for PatternImageResolver {
    fn resolve(&self, route: &str, params: &BTreeMap<String, String>) -> Option<String> {
        let pattern = self.patterns.get(route)?;
        let (path, _) = expand_pattern(route, pattern, params).ok()?;
        self.base.join(&path).ok().map(String::from)
    }
}
