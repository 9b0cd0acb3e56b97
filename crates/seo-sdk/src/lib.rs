//! Public SDK for SEO metadata resolution.
//!
//! This crate re-exports all functionality:
//!
//! ```ignore
//! use std::sync::Arc;
//! use seo_sdk::prelude::*;
//!
//! let links = RouteTable::new("https://example.com")?
//!     .with_route("Front:Homepage:default", "en", "/en/")
//!     .with_route("Front:Homepage:default", "cs", "/cs/");
//! let locales = StaticLocaleConfig::new(["en", "cs"])
//!     .with_titles("en", TitleFormatConfig::new().with_site_name("Example"));
//! let pages = StaticMetadataSource::new().with_page("en/", "en", MetadataRecord::new());
//!
//! let mut resolver = MetaResolver::new(
//!     Arc::new(pages),
//!     Arc::new(locales),
//!     Arc::new(links),
//!     Arc::new(InMemoryStore::new()),
//! );
//!
//! // Called by the router once the request is matched.
//! resolver.matched(
//!     "/en/",
//!     MatchParams::new()
//!         .with("presenter", "Front:Homepage")
//!         .with("action", "default")
//!         .with("locale", "en"),
//! );
//!
//! let head = resolver.html()?;
//! ```

pub use seo_cache;
pub use seo_core;
pub use seo_html;
pub use seo_resolver;

/// Prelude for convenient imports.
pub mod prelude {
    pub use seo_cache::*;
    pub use seo_core::*;
    pub use seo_html::*;
    pub use seo_resolver::*;
}
