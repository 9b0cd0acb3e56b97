//! Per-page metadata records.

use serde::{Deserialize, Serialize};

fn default_present() -> bool {
    true
}

/// Metadata configured for one page in one locale.
///
/// A record with `present == false` is the "no metadata configured" sentinel;
/// it is a normal value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Whether metadata exists for the page.
    #[serde(default = "default_present")]
    pub present: bool,
    /// Raw page title before formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Meta description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Open Graph title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    /// Open Graph description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    /// Ask crawlers not to index the page.
    #[serde(default)]
    pub no_index: bool,
    /// Ask crawlers not to follow links on the page.
    #[serde(default)]
    pub no_follow: bool,
}

impl Default for MetadataRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataRecord {
    /// Create an empty, present record.
    pub fn new() -> Self {
        Self {
            present: true,
            meta_title: None,
            meta_description: None,
            og_title: None,
            og_description: None,
            no_index: false,
            no_follow: false,
        }
    }

    /// The "no metadata for this page" sentinel.
    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    /// Set the page title.
    pub fn with_meta_title(mut self, title: impl Into<String>) -> Self {
        self.meta_title = Some(title.into());
        self
    }

    /// Set the meta description.
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Set the Open Graph title.
    pub fn with_og_title(mut self, title: impl Into<String>) -> Self {
        self.og_title = Some(title.into());
        self
    }

    /// Set the Open Graph description.
    pub fn with_og_description(mut self, description: impl Into<String>) -> Self {
        self.og_description = Some(description.into());
        self
    }

    /// Mark the page `noindex`.
    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }

    /// Mark the page `nofollow`.
    pub fn no_follow(mut self) -> Self {
        self.no_follow = true;
        self
    }

    /// Robots directives in output order.
    pub fn robots_directives(&self) -> Vec<&'static str> {
        let mut directives = Vec::new();
        if self.no_index {
            directives.push("noindex");
        }
        if self.no_follow {
            directives.push("nofollow");
        }
        directives
    }
}
