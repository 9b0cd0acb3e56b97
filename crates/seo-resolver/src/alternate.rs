//! Cross-locale alternate links.

use std::collections::BTreeMap;

use seo_core::{LinkBuilder, LOCALE_KEY};
use seo_html::MetaTag;

/// The same page in another locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    /// `hreflang` value.
    pub locale: String,
    /// Absolute URL.
    pub url: String,
}

impl AlternateLink {
    /// Create a link.
    pub fn new(locale: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            url: url.into(),
        }
    }

    /// `<link rel="alternate">` tag for this link.
    pub fn to_tag(&self) -> MetaTag {
        MetaTag::alternate(self.url.clone(), self.locale.clone())
    }
}

/// Build one alternate link per locale, in `locales` order.
///
/// `params` are the link parameters of the current match; the `locale`
/// parameter is replaced for each target. Locales the link builder rejects are
/// skipped.
pub fn derive_alternates(
    links: &dyn LinkBuilder,
    route: &str,
    params: &BTreeMap<String, String>,
    locales: &[String],
) -> Vec<AlternateLink> {
    let mut target = params.clone();
    let mut alternates = Vec::with_capacity(locales.len());

    for locale in locales {
        target.insert(LOCALE_KEY.to_string(), locale.clone());
        match links.build_link(route, &target) {
            Ok(url) => alternates.push(AlternateLink::new(locale.clone(), url)),
            Err(err) => {
                tracing::debug!(route, locale = %locale, error = %err, "skipping alternate locale");
            }
        }
    }

    alternates
}

#[cfg(test)]
mod tests {
    use super::*;
    use seo_core::RouteTable;

    fn table() -> RouteTable {
        RouteTable::new("https://example.com")
            .unwrap()
            .with_route("Front:Article:detail", "en", "/en/article/{slug}")
            .with_route("Front:Article:detail", "cs", "/cs/clanek/{slug}")
    }

    fn params() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("locale".to_string(), "en".to_string()),
            ("slug".to_string(), "hello".to_string()),
        ])
    }

    #[test]
    fn test_alternates_follow_locale_order_and_skip_failures() {
        let locales = vec!["cs".to_string(), "de".to_string(), "en".to_string()];
        let alternates = derive_alternates(&table(), "Front:Article:detail", &params(), &locales);

        assert_eq!(
            alternates,
            vec![
                AlternateLink::new("cs", "https://example.com/cs/clanek/hello"),
                AlternateLink::new("en", "https://example.com/en/article/hello"),
            ]
        );
    }

    #[test]
    fn test_unknown_route_yields_nothing() {
        let locales = vec!["en".to_string()];
        assert!(derive_alternates(&table(), "Front:Missing:default", &params(), &locales).is_empty());
    }

    #[test]
    fn test_to_tag() {
        let link = AlternateLink::new("cs", "https://example.com/cs/");
        assert_eq!(
            link.to_tag().render(),
            r#"<link rel="alternate" href="https://example.com/cs/" hreflang="cs">"#
        );
    }
}
