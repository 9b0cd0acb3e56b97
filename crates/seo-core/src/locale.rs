//! Localization seam and per-locale title settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Title template used when a locale has no override.
pub const DEFAULT_TITLE_FORMAT: &str = "{{ title }} {{ separator }} {{ suffix }}";

fn default_format() -> String {
    DEFAULT_TITLE_FORMAT.to_string()
}

/// Title formatting settings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleFormatConfig {
    /// Template with `{{ title }}`, `{{ separator }}` and `{{ suffix }}`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Separator; `|` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Suffix, usually the site name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Site name, used as the homepage title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl Default for TitleFormatConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            separator: None,
            suffix: None,
            site_name: None,
        }
    }
}

impl TitleFormatConfig {
    /// Create settings with the default template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Set the site name.
    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = Some(name.into());
        self
    }
}

/// Localization settings supplied by the host application.
pub trait LocaleConfig: Send + Sync {
    /// Locales the site is published in, in output order.
    fn available_locales(&self) -> Vec<String>;

    /// Locale of the current request when the route carries none.
    fn current_locale(&self) -> String;

    /// Title template override for a locale.
    fn title_format(&self, locale: &str) -> Option<String>;

    /// Title separator for a locale.
    fn title_separator(&self, locale: &str) -> Option<String>;

    /// Title suffix for a locale.
    fn title_suffix(&self, locale: &str) -> Option<String>;

    /// Site name for a locale.
    fn site_name(&self, locale: &str) -> Option<String>;

    /// All title settings for a locale, with the default template applied.
    fn title_config(&self, locale: &str) -> TitleFormatConfig {
        TitleFormatConfig {
            format: self.title_format(locale).unwrap_or_else(default_format),
            separator: self.title_separator(locale),
            suffix: self.title_suffix(locale),
            site_name: self.site_name(locale),
        }
    }
}

/// Table-driven [`LocaleConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticLocaleConfig {
    /// Available locales in output order.
    pub available: Vec<String>,
    /// Fallback locale.
    pub default: String,
    /// Per-locale title settings.
    #[serde(default)]
    pub titles: HashMap<String, TitleFormatConfig>,
}

impl StaticLocaleConfig {
    /// Create a config with the given locales; the first one is the default.
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let available: Vec<String> = available.into_iter().map(Into::into).collect();
        let default = available.first().cloned().unwrap_or_default();
        Self {
            available,
            default,
            titles: HashMap::new(),
        }
    }

    /// Set the fallback locale.
    pub fn with_default(mut self, locale: impl Into<String>) -> Self {
        self.default = locale.into();
        self
    }

    /// Set title settings for a locale.
    pub fn with_titles(mut self, locale: impl Into<String>, titles: TitleFormatConfig) -> Self {
        self.titles.insert(locale.into(), titles);
        self
    }
}

impl LocaleConfig for StaticLocaleConfig {
    fn available_locales(&self) -> Vec<String> {
        self.available.clone()
    }

    fn current_locale(&self) -> String {
        self.default.clone()
    }

    fn title_format(&self, locale: &str) -> Option<String> {
        self.titles.get(locale).map(|t| t.format.clone())
    }

    fn title_separator(&self, locale: &str) -> Option<String> {
        self.titles.get(locale).and_then(|t| t.separator.clone())
    }

    fn title_suffix(&self, locale: &str) -> Option<String> {
        self.titles.get(locale).and_then(|t| t.suffix.clone())
    }

    fn site_name(&self, locale: &str) -> Option<String> {
        self.titles.get(locale).and_then(|t| t.site_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_config_defaults_for_unknown_locale() {
        let config = StaticLocaleConfig::new(["en", "cs"]);
        let titles = config.title_config("de");

        assert_eq!(titles.format, DEFAULT_TITLE_FORMAT);
        assert!(titles.separator.is_none());
        assert!(titles.suffix.is_none());
        assert!(titles.site_name.is_none());
    }

    #[test]
    fn test_title_config_per_locale() {
        let config = StaticLocaleConfig::new(["en", "cs"]).with_titles(
            "cs",
            TitleFormatConfig::new()
                .with_format("{{ suffix }} {{ separator }} {{ title }}")
                .with_separator("-")
                .with_suffix("Příklad")
                .with_site_name("Příklad.cz"),
        );

        let titles = config.title_config("cs");
        assert_eq!(titles.format, "{{ suffix }} {{ separator }} {{ title }}");
        assert_eq!(titles.separator.as_deref(), Some("-"));
        assert_eq!(titles.suffix.as_deref(), Some("Příklad"));
        assert_eq!(titles.site_name.as_deref(), Some("Příklad.cz"));
    }

    #[test]
    fn test_first_locale_is_default() {
        let config = StaticLocaleConfig::new(["cs", "en"]);
        assert_eq!(config.current_locale(), "cs");

        let config = config.with_default("en");
        assert_eq!(config.current_locale(), "en");
    }

    #[test]
    fn test_available_locales_keep_order() {
        let config = StaticLocaleConfig::new(["en", "de", "cs"]);
        assert_eq!(config.available_locales(), vec!["en", "de", "cs"]);
    }

    #[test]
    fn test_deserialize_missing_format_uses_default() {
        let config: StaticLocaleConfig = toml::from_str(
            r#"
            available = ["en"]
            default = "en"

            [titles.en]
            suffix = "Example"
            "#,
        )
        .unwrap();

        assert_eq!(config.title_config("en").format, DEFAULT_TITLE_FORMAT);
        assert_eq!(config.title_suffix("en").as_deref(), Some("Example"));
    }
}
