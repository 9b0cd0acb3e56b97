//! Request context holding the router's match for the current request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Match parameter naming the presenter (e.g. `Front:Article`).
pub const PRESENTER_KEY: &str = "presenter";

/// Match parameter naming the presenter action (e.g. `detail`).
pub const ACTION_KEY: &str = "action";

/// Match parameter carrying the request locale.
pub const LOCALE_KEY: &str = "locale";

/// Presenters treated as the site homepage.
const HOMEPAGE_PRESENTERS: [&str; 2] = ["Homepage", "Front:Homepage"];

/// Action of the homepage presenter.
const HOMEPAGE_ACTION: &str = "default";

/// Normalize a request path the way the router reports path info.
///
/// Drops the query string and fragment, then the leading slash, so
/// `/en/about?x=1` and `en/about` address the same page.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    path[..end].trim_start_matches('/')
}

/// Parameters produced by the router for a matched request.
///
/// Ordered so that derived link parameters and cache-relevant output are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchParams(BTreeMap<String, String>);

impl MatchParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Presenter name, e.g. `Front:Article`.
    pub fn presenter(&self) -> Option<&str> {
        self.get(PRESENTER_KEY)
    }

    /// Presenter action, e.g. `detail`.
    pub fn action(&self) -> Option<&str> {
        self.get(ACTION_KEY)
    }

    /// Locale parameter, if the route carries one.
    pub fn locale(&self) -> Option<&str> {
        self.get(LOCALE_KEY)
    }

    /// Logical route name `presenter:action`.
    ///
    /// Returns `None` unless both parts were matched.
    pub fn route_name(&self) -> Option<String> {
        match (self.presenter(), self.action()) {
            (Some(presenter), Some(action)) => Some(format!("{}:{}", presenter, action)),
            _ => None,
        }
    }

    /// Parameters for link generation: everything except presenter and action.
    pub fn link_params(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter(|(k, _)| k.as_str() != PRESENTER_KEY && k.as_str() != ACTION_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Whether the match points at the homepage default action.
    pub fn is_homepage(&self) -> bool {
        self.presenter()
            .is_some_and(|p| HOMEPAGE_PRESENTERS.contains(&p))
            && self.action() == Some(HOMEPAGE_ACTION)
    }

    /// Iterate over all parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters were matched.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for MatchParams {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MatchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A request matched by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMatch {
    path: String,
    params: MatchParams,
}

impl RequestMatch {
    /// Create a match; the path is normalized.
    pub fn new(path: &str, params: MatchParams) -> Self {
        Self {
            path: normalize_path(path).to_string(),
            params,
        }
    }

    /// Normalized path info (no leading slash, no query string).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Router match parameters.
    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    /// Locale from the match, or `fallback` when the route carries none.
    pub fn locale_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.params.locale().unwrap_or(fallback)
    }

    /// Logical route name `presenter:action`.
    pub fn route_name(&self) -> Option<String> {
        self.params.route_name()
    }
}

/// Per-request binding of matched state.
///
/// Starts unbound; the router binds it once the request is matched.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    current: Option<RequestMatch>,
}

impl RequestContext {
    /// Create an unbound context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the matched path and parameters, replacing any prior binding.
    pub fn bind(&mut self, path: &str, params: MatchParams) {
        self.current = Some(RequestMatch::new(path, params));
    }

    /// Whether a request match has been bound.
    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }

    /// The bound match, if any.
    pub fn current(&self) -> Option<&RequestMatch> {
        self.current.as_ref()
    }

    /// Return to the unbound state.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_params() -> MatchParams {
        MatchParams::new()
            .with("presenter", "Front:Article")
            .with("action", "detail")
            .with("slug", "hello")
            .with("locale", "en")
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/en/about"), "en/about");
        assert_eq!(normalize_path("en/about?page=2"), "en/about");
        assert_eq!(normalize_path("/en/about#team"), "en/about");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_route_name() {
        assert_eq!(
            article_params().route_name(),
            Some("Front:Article:detail".to_string())
        );
    }

    #[test]
    fn test_route_name_requires_both_parts() {
        let params = MatchParams::new().with("presenter", "Front:Article");
        assert_eq!(params.route_name(), None);
    }

    #[test]
    fn test_link_params_strip_presenter_and_action() {
        let link = article_params().link_params();

        assert_eq!(link.len(), 2);
        assert_eq!(link.get("slug").map(String::as_str), Some("hello"));
        assert_eq!(link.get("locale").map(String::as_str), Some("en"));
        assert!(!link.contains_key("presenter"));
        assert!(!link.contains_key("action"));
    }

    #[test]
    fn test_is_homepage() {
        let home = MatchParams::new()
            .with("presenter", "Homepage")
            .with("action", "default");
        let front_home = MatchParams::new()
            .with("presenter", "Front:Homepage")
            .with("action", "default");
        let other_action = MatchParams::new()
            .with("presenter", "Homepage")
            .with("action", "contact");

        assert!(home.is_homepage());
        assert!(front_home.is_homepage());
        assert!(!other_action.is_homepage());
        assert!(!article_params().is_homepage());
    }

    #[test]
    fn test_from_iterator() {
        let params: MatchParams = [("presenter", "Blog"), ("action", "list")]
            .into_iter()
            .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.route_name(), Some("Blog:list".to_string()));
    }

    #[test]
    fn test_locale_or_fallback() {
        let with_locale = RequestMatch::new("/en/article/hello", article_params());
        let without_locale = RequestMatch::new("/", MatchParams::new());

        assert_eq!(with_locale.locale_or("cs"), "en");
        assert_eq!(without_locale.locale_or("cs"), "cs");
    }

    #[test]
    fn test_context_starts_unbound() {
        let ctx = RequestContext::new();
        assert!(!ctx.is_bound());
        assert!(ctx.current().is_none());
    }

    #[test]
    fn test_context_bind_replaces_previous() {
        let mut ctx = RequestContext::new();
        ctx.bind("/first", MatchParams::new());
        ctx.bind("/second?x=1", article_params());

        let current = ctx.current().unwrap();
        assert_eq!(current.path(), "second");
        assert_eq!(current.params(), &article_params());
    }

    #[test]
    fn test_context_clear() {
        let mut ctx = RequestContext::new();
        ctx.bind("/about", MatchParams::new());
        ctx.clear();
        assert!(!ctx.is_bound());
    }
}
