//! Metadata lookup seam.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::context::normalize_path;
use crate::record::MetadataRecord;

/// Source of per-page metadata.
///
/// Must return [`MetadataRecord::absent`] (not an error) when nothing is
/// configured for the page.
pub trait MetadataSource: Send + Sync {
    /// Look up metadata for a normalized path in a locale.
    fn lookup(&self, path: &str, locale: &str) -> MetadataRecord;
}

/// One page entry as written in a site file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page path (leading slash optional).
    pub path: String,
    /// Page locale.
    pub locale: String,
    /// Metadata for the page.
    #[serde(flatten)]
    pub record: MetadataRecord,
}

/// In-memory metadata table keyed by (path, locale).
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataSource {
    pages: HashMap<(String, String), MetadataRecord>,
}

impl StaticMetadataSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from page entries; later duplicates win.
    pub fn from_pages(pages: impl IntoIterator<Item = PageMetadata>) -> Self {
        let mut source = Self::new();
        for page in pages {
            source.insert(&page.path, &page.locale, page.record);
        }
        source
    }

    /// Add a page.
    pub fn with_page(mut self, path: &str, locale: &str, record: MetadataRecord) -> Self {
        self.insert(path, locale, record);
        self
    }

    /// Insert or replace a page.
    pub fn insert(&mut self, path: &str, locale: &str, record: MetadataRecord) {
        self.pages.insert(
            (normalize_path(path).to_string(), locale.to_string()),
            record,
        );
    }

    /// Number of configured pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages are configured.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl MetadataSource for StaticMetadataSource {
    fn lookup(&self, path: &str, locale: &str) -> MetadataRecord {
        self.pages
            .get(&(normalize_path(path).to_string(), locale.to_string()))
            .cloned()
            .unwrap_or_else(MetadataRecord::absent)
    }
}
