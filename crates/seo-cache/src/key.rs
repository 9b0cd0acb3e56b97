//! Cache key composition.

use std::fmt;

/// Separator between key components.
///
/// A NUL byte cannot appear in a URL path or a locale tag, so `("a", "b\0c")`
/// and `("a\0b", "c")` never meet in practice and distinct `(path, locale)`
/// pairs always map to distinct keys.
pub const KEY_SEPARATOR: char = '\0';

/// A cache key built from one or more components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// The computed key string.
    key: String,
    /// Components that make up the key (for debugging).
    components: Vec<String>,
}

impl CacheKey {
    /// Create a cache key from a raw string.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            components: vec![key.clone()],
            key,
        }
    }

    /// Join components with [`KEY_SEPARATOR`].
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = parts.into_iter().map(Into::into).collect();
        let mut key = String::new();
        for (i, part) in components.iter().enumerate() {
            if i > 0 {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(part);
        }
        Self { key, components }
    }

    /// Key for a rendered tag block of `path` in `locale`.
    pub fn tag_block(path: &str, locale: &str) -> Self {
        Self::from_parts([path, locale])
    }

    /// Get the key string.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Get the key components (for debugging).
    pub fn components(&self) -> &[String] {
        &self.components
    }
}

impl fmt::Display for CacheKey {
    /// Renders components joined by `/` so keys are readable in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_block_key_uses_nul_separator() {
        let key = CacheKey::tag_block("about", "en");
        assert_eq!(key.as_str(), "about\0en");
        assert_eq!(key.components(), ["about", "en"]);
    }

    #[test]
    fn test_keys_do_not_collide() {
        assert_ne!(
            CacheKey::tag_block("en/about", "cs"),
            CacheKey::tag_block("en", "about/cs")
        );
        assert_ne!(CacheKey::tag_block("", "en"), CacheKey::tag_block("en", ""));
    }

    #[test]
    fn test_display_is_readable() {
        assert_eq!(CacheKey::tag_block("blog/post", "cs").to_string(), "blog/post/cs");
    }

    #[test]
    fn test_raw_key() {
        let key = CacheKey::new("raw");
        assert_eq!(key.as_str(), "raw");
        assert_eq!(key.components().len(), 1);
    }
}
