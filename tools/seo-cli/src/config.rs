//! Site file: locales, routes and page metadata.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use seo_sdk::prelude::*;

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["seo.toml", ".seo.toml", "seo.json"];

/// Site file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteSection,

    /// Available locales and per-locale title settings.
    #[serde(default)]
    pub locales: LocalesSection,

    /// Named routes with one URL pattern per locale.
    #[serde(default)]
    pub routes: Vec<RouteEntry>,

    /// Page metadata records.
    #[serde(default)]
    pub pages: Vec<PageMetadata>,

    /// Open Graph image pattern per route.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub og_images: BTreeMap<String, String>,
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// Absolute URL that route patterns are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cache namespace.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_base_url() -> String {
    "http://localhost/".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            namespace: default_namespace(),
        }
    }
}

/// `[locales]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalesSection {
    /// Locales in output order.
    #[serde(default)]
    pub available: Vec<String>,

    /// Fallback locale; the first available one when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Title settings per locale.
    #[serde(default)]
    pub titles: BTreeMap<String, TitleFormatConfig>,
}

/// `[[routes]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route name, `Module:Presenter:action`.
    pub name: String,

    /// URL pattern per locale, e.g. `/en/article/{slug}`.
    #[serde(default)]
    pub patterns: BTreeMap<String, String>,
}

impl RouteEntry {
    /// Presenter and action parts of the route name.
    pub fn split_name(&self) -> Option<(&str, &str)> {
        split_route(&self.name)
    }
}

/// Split `Module:Presenter:action` at the last colon.
pub fn split_route(name: &str) -> Option<(&str, &str)> {
    let (presenter, action) = name.rsplit_once(':')?;
    if presenter.is_empty() || action.is_empty() {
        return None;
    }
    Some((presenter, action))
}

/// Findings of [`SiteConfig::validate`].
#[derive(Debug, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

impl SiteConfig {
    /// Load a site file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON site file: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML site file: {}", path.display()))
        }
    }

    /// Find and load the nearest site file from `start` upwards.
    pub fn find(start: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let path = current.join(name);
                if path.is_file() {
                    let config = Self::load(&path)?;
                    return Ok(Some((path, config)));
                }
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Fallback locale.
    pub fn default_locale(&self) -> Option<&str> {
        self.locales
            .default
            .as_deref()
            .or_else(|| self.locales.available.first().map(String::as_str))
    }

    /// Localization collaborator.
    pub fn locale_config(&self) -> StaticLocaleConfig {
        let mut locales = StaticLocaleConfig::new(self.locales.available.iter().cloned());
        if let Some(default) = &self.locales.default {
            locales = locales.with_default(default.clone());
        }
        for (locale, titles) in &self.locales.titles {
            locales = locales.with_titles(locale.clone(), titles.clone());
        }
        locales
    }

    /// Link-generation collaborator.
    pub fn route_table(&self) -> Result<RouteTable> {
        let mut table = RouteTable::new(&self.site.base_url)?;
        for route in &self.routes {
            for (locale, pattern) in &route.patterns {
                table.add_route(route.name.clone(), locale.clone(), pattern.clone());
            }
        }
        Ok(table)
    }

    /// Image collaborator, if any image patterns are configured.
    pub fn image_resolver(&self) -> Result<Option<PatternImageResolver>> {
        if self.og_images.is_empty() {
            return Ok(None);
        }
        let mut images = PatternImageResolver::new(&self.site.base_url)?;
        for (route, pattern) in &self.og_images {
            images = images.with_pattern(route.clone(), pattern.clone());
        }
        Ok(Some(images))
    }

    /// Unbound resolver over this site's collaborators and a fresh in-memory cache.
    pub fn resolver(&self) -> Result<MetaResolver> {
        let source = StaticMetadataSource::from_pages(self.pages.iter().cloned());
        let mut resolver = MetaResolver::new(
            Arc::new(source),
            Arc::new(self.locale_config()),
            Arc::new(self.route_table()?),
            Arc::new(InMemoryStore::new()),
        )
        .with_namespace(self.site.namespace.clone());

        if let Some(images) = self.image_resolver()? {
            resolver.set_image_resolver(Arc::new(images));
        }
        Ok(resolver)
    }

    /// Match `path` against the route patterns.
    ///
    /// Returns the router parameters: `presenter`, `action`, `locale` and one
    /// entry per `{name}` segment. Only whole-segment placeholders capture.
    pub fn match_route(&self, path: &str) -> Option<MatchParams> {
        let segments = split_segments(normalize_path(path));
        for route in &self.routes {
            let Some((presenter, action)) = route.split_name() else {
                continue;
            };
            for (locale, pattern) in &route.patterns {
                if let Some(mut params) = match_pattern(pattern, &segments) {
                    params.insert(PRESENTER_KEY, presenter);
                    params.insert(ACTION_KEY, action);
                    params.insert(LOCALE_KEY, locale.clone());
                    return Some(params);
                }
            }
        }
        None
    }

    /// Check the site file for mistakes the resolver would silently accept.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let available = &self.locales.available;

        if available.is_empty() {
            report.errors.push("locales.available must list at least one locale".to_string());
        }
        if let Some(default) = &self.locales.default {
            if !available.contains(default) {
                report.errors.push(format!(
                    "locales.default '{}' is not in locales.available",
                    default
                ));
            }
        }
        if let Err(err) = RouteTable::new(&self.site.base_url) {
            report.errors.push(format!("site.base_url: {}", err));
        }

        for (locale, titles) in &self.locales.titles {
            if !titles.format.contains(TITLE_PLACEHOLDER) {
                report.errors.push(format!(
                    "locales.titles.{}.format does not contain {}",
                    locale, TITLE_PLACEHOLDER
                ));
            }
            if !available.contains(locale) {
                report.warnings.push(format!(
                    "locales.titles.{} configures a locale that is not available",
                    locale
                ));
            }
        }

        for (i, route) in self.routes.iter().enumerate() {
            if route.split_name().is_none() {
                report.errors.push(format!(
                    "routes[{}].name '{}' must be Presenter:action",
                    i, route.name
                ));
            }
            for locale in route.patterns.keys() {
                if !available.contains(locale) {
                    report.warnings.push(format!(
                        "routes[{}] ({}) has a pattern for unavailable locale '{}'",
                        i, route.name, locale
                    ));
                }
            }
        }

        for (i, page) in self.pages.iter().enumerate() {
            if !available.contains(&page.locale) {
                report.warnings.push(format!(
                    "pages[{}] ({}) uses unavailable locale '{}'",
                    i, page.path, page.locale
                ));
            }
            if page.record.meta_title.is_none() {
                report.warnings.push(format!("pages[{}] ({}) has no meta_title", i, page.path));
            }
        }

        for route in self.og_images.keys() {
            if !self.routes.iter().any(|r| &r.name == route) {
                report.warnings.push(format!("og_images.\"{}\" names an unknown route", route));
            }
        }

        report
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<MatchParams> {
    let expected = split_segments(normalize_path(pattern));
    if expected.len() != segments.len() {
        return None;
    }

    let mut params = MatchParams::new();
    for (want, got) in expected.iter().zip(segments) {
        match want.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => {
                let value = percent_decode_str(got).decode_utf8().ok()?;
                params.insert(name, value.into_owned());
            }
            None if want == got => {}
            None => return None,
        }
    }
    Some(params)
}

/// Generate a starter `seo.toml`.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# SEO metadata site file

[site]
base_url = "{base_url}"
namespace = "seo-meta"

[locales]
available = ["en", "cs"]
default = "en"

[locales.titles.en]
format = "{{{{ title }}}} {{{{ separator }}}} {{{{ suffix }}}}"
separator = "|"
suffix = "Example"
site_name = "Example"

[locales.titles.cs]
suffix = "Příklad"
site_name = "Příklad"

[[routes]]
name = "Front:Homepage:default"
[routes.patterns]
en = "/en/"
cs = "/cs/"

[[routes]]
name = "Front:Article:detail"
[routes.patterns]
en = "/en/article/{{slug}}"
cs = "/cs/clanek/{{slug}}"

[[pages]]
path = "en/"
locale = "en"
meta_description = "Welcome to Example"

[[pages]]
path = "en/article/hello"
locale = "en"
meta_title = "Hello world"
meta_description = "Our first article"

[og_images]
"Front:Article:detail" = "/images/og/{{slug}}.png"
"#,
        base_url = base_url
    )
}
