//! Link generation seam.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::context::LOCALE_KEY;
use crate::error::{ConfigError, InvalidLinkError};

/// Characters left unescaped inside a path segment (RFC 3986 unreserved).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Turns a logical route and parameters into an absolute URL.
pub trait LinkBuilder: Send + Sync {
    /// Build an absolute URL for `route` (`Module:Presenter:action`).
    ///
    /// The target locale is carried in `params["locale"]`. Fails when the
    /// route/params combination cannot be resolved for that locale.
    fn build_link(
        &self,
        route: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String, InvalidLinkError>;
}

/// Parse a base URL that patterns are joined onto.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let base = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if base.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase(base_url.to_string()));
    }
    Ok(base)
}

/// Substitute `{name}` placeholders in a URL pattern.
///
/// Returns the expanded path and the names of the parameters consumed.
/// An unterminated `{` is kept literally.
pub(crate) fn expand_pattern<'p>(
    route: &str,
    pattern: &'p str,
    params: &BTreeMap<String, String>,
) -> Result<(String, BTreeSet<&'p str>), InvalidLinkError> {
    let mut out = String::with_capacity(pattern.len());
    let mut used = BTreeSet::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let name = &after[..close];
        let value = params
            .get(name)
            .ok_or_else(|| InvalidLinkError::MissingParam {
                route: route.to_string(),
                param: name.to_string(),
            })?;
        out.extend(utf8_percent_encode(value, SEGMENT));
        used.insert(name);
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok((out, used))
}

/// Pattern-based [`LinkBuilder`]: one URL pattern per route and locale.
///
/// ```ignore
/// let links = RouteTable::new("https://example.com")?
///     .with_route("Front:Article:detail", "en", "/en/article/{slug}")
///     .with_route("Front:Article:detail", "cs", "/cs/clanek/{slug}");
/// ```
///
/// Parameters not consumed by the pattern (other than `locale`) are appended
/// as a query string in key order. Patterns without a leading slash resolve
/// relative to the base URL path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: Url,
    routes: HashMap<String, HashMap<String, String>>,
}

impl RouteTable {
    /// Create an empty table rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base: parse_base_url(base_url)?,
            routes: HashMap::new(),
        })
    }

    /// Register a pattern for a route in a locale.
    pub fn with_route(
        mut self,
        route: impl Into<String>,
        locale: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.add_route(route, locale, pattern);
        self
    }

    /// Register a pattern for a route in a locale, replacing any previous one.
    pub fn add_route(
        &mut self,
        route: impl Into<String>,
        locale: impl Into<String>,
        pattern: impl Into<String>,
    ) {
        self.routes
            .entry(route.into())
            .or_default()
            .insert(locale.into(), pattern.into());
    }

    /// Base URL of the table.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Locales a route has patterns for.
    pub fn locales_for(&self, route: &str) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .routes
            .get(route)
            .map(|p| p.keys().map(String::as_str).collect())
            .unwrap_or_default();
        locales.sort_unstable();
        locales
    }

    /// Registered route names, sorted.
    pub fn route_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl LinkBuilder for RouteTable {
    fn build_link(
        &self,
        route: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String, InvalidLinkError> {
        let patterns = self
            .routes
            .get(route)
            .ok_or_else(|| InvalidLinkError::UnknownRoute(route.to_string()))?;
        let locale = params
            .get(LOCALE_KEY)
            .ok_or_else(|| InvalidLinkError::MissingLocale {
                route: route.to_string(),
            })?;
        let pattern = patterns
            .get(locale)
            .ok_or_else(|| InvalidLinkError::UnsupportedLocale {
                route: route.to_string(),
                locale: locale.clone(),
            })?;

        let (path, used) = expand_pattern(route, pattern, params)?;
        let mut url = self
            .base
            .join(&path)
            .map_err(|e| InvalidLinkError::InvalidUrl {
                route: route.to_string(),
                reason: e.to_string(),
            })?;

        let extra: Vec<(&String, &String)> = params
            .iter()
            .filter(|(k, _)| k.as_str() != LOCALE_KEY && !used.contains(k.as_str()))
            .collect();
        if !extra.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in extra {
                query.append_pair(key, value);
            }
        }

        Ok(url.into())
    }
}
