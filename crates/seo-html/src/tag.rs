//! `<head>` tag rendering.

use std::fmt;

use crate::escape::{escape_html, escape_html_attr};

/// A single metadata tag in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    /// `<title>`.
    Title(String),
    /// `<meta name=".." content="..">`.
    Name { name: String, content: String },
    /// `<meta property=".." content="..">` (Open Graph).
    Property { property: String, content: String },
    /// `<link rel="alternate" href=".." hreflang="..">`.
    Alternate { href: String, hreflang: String },
}

impl MetaTag {
    /// Page title.
    pub fn title(title: impl Into<String>) -> Self {
        Self::Title(title.into())
    }

    /// Meta description.
    pub fn description(content: impl Into<String>) -> Self {
        Self::name("description", content)
    }

    /// Robots directives, joined with `, `.
    pub fn robots(directives: &[&str]) -> Self {
        Self::name("robots", directives.join(", "))
    }

    /// Generic `name` meta tag.
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Name {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Open Graph title.
    pub fn og_title(content: impl Into<String>) -> Self {
        Self::property("og:title", content)
    }

    /// Open Graph description.
    pub fn og_description(content: impl Into<String>) -> Self {
        Self::property("og:description", content)
    }

    /// Open Graph image.
    pub fn og_image(url: impl Into<String>) -> Self {
        Self::property("og:image", url)
    }

    /// Generic `property` meta tag.
    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    /// Alternate-locale link.
    pub fn alternate(href: impl Into<String>, hreflang: impl Into<String>) -> Self {
        Self::Alternate {
            href: href.into(),
            hreflang: hreflang.into(),
        }
    }

    /// Render the tag to HTML.
    ///
    /// Tag and attribute names are written as given; text and attribute
    /// values are escaped.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => write!(f, "<title>{}</title>", escape_html(title)),
            Self::Name { name, content } => write!(
                f,
                r#"<meta name="{}" content="{}">"#,
                name,
                escape_html_attr(content)
            ),
            Self::Property { property, content } => write!(
                f,
                r#"<meta property="{}" content="{}">"#,
                property,
                escape_html_attr(content)
            ),
            Self::Alternate { href, hreflang } => write!(
                f,
                r#"<link rel="alternate" href="{}" hreflang="{}">"#,
                escape_html_attr(href),
                escape_html_attr(hreflang)
            ),
        }
    }
}

/// Ordered collection of head tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTags {
    tags: Vec<MetaTag>,
}

impl HeadTags {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag.
    pub fn push(&mut self, tag: MetaTag) {
        self.tags.push(tag);
    }

    /// Append several tags in order.
    pub fn extend(&mut self, tags: impl IntoIterator<Item = MetaTag>) {
        self.tags.extend(tags);
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tags were added.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Render all tags joined by newlines; `None` when empty.
    pub fn render(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.tags.iter().map(MetaTag::render).collect();
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_title_escapes_text() {
        assert_eq!(
            MetaTag::title("Tom & Jerry's <Show>").render(),
            "<title>Tom &amp; Jerry&apos;s &lt;Show&gt;</title>"
        );
    }

    #[test]
    fn test_render_description() {
        assert_eq!(
            MetaTag::description("Say \"hello\"").render(),
            r#"<meta name="description" content="Say &quot;hello&quot;">"#
        );
    }

    #[test]
    fn test_render_og_tags() {
        assert_eq!(
            MetaTag::og_title("About").render(),
            r#"<meta property="og:title" content="About">"#
        );
        assert_eq!(
            MetaTag::og_description("Team").render(),
            r#"<meta property="og:description" content="Team">"#
        );
        assert_eq!(
            MetaTag::og_image("https://cdn.example.com/a.png?w=1&h=2").render(),
            r#"<meta property="og:image" content="https://cdn.example.com/a.png?w=1&amp;h=2">"#
        );
    }

    #[test]
    fn test_render_robots() {
        assert_eq!(
            MetaTag::robots(&["noindex", "nofollow"]).render(),
            r#"<meta name="robots" content="noindex, nofollow">"#
        );
    }

    #[test]
    fn test_render_alternate() {
        assert_eq!(
            MetaTag::alternate("https://example.com/cs/", "cs").render(),
            r#"<link rel="alternate" href="https://example.com/cs/" hreflang="cs">"#
        );
    }

    #[test]
    fn test_render_attribute_backtick_padding() {
        assert_eq!(
            MetaTag::description("`x`").render(),
            r#"<meta name="description" content="`x` ">"#
        );
    }

    #[test]
    fn test_head_tags_render_in_order() {
        let mut head = HeadTags::new();
        head.push(MetaTag::title("About"));
        head.extend([MetaTag::description("Team"), MetaTag::og_title("About us")]);

        assert_eq!(head.len(), 3);
        assert_eq!(
            head.render().unwrap(),
            "<title>About</title>\n\
             <meta name=\"description\" content=\"Team\">\n\
             <meta property=\"og:title\" content=\"About us\">"
        );
    }

    #[test]
    fn test_head_tags_empty_renders_none() {
        assert!(HeadTags::new().render().is_none());
    }
}
