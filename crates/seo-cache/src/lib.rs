//! Caching layer for rendered SEO tag blocks.
//!
//! This crate provides:
//! - `CacheStore` - Key-value store seam with per-entry TTL
//! - `InMemoryStore` - Concurrent in-process store with lazy expiry
//! - `CacheKey` - Null-separated composite keys
//! - `Namespace` - Prefix-scoped view over a shared store
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use seo_cache::{CacheKey, InMemoryStore, Namespace};
//!
//! let store = Arc::new(InMemoryStore::new());
//! let cache = Namespace::new(store, "seo-meta");
//!
//! let key = CacheKey::from_parts(["about", "en"]);
//! cache.set(&key, "<title>About</title>", Duration::from_secs(90 * 60))?;
//! assert_eq!(cache.get(&key)?.as_deref(), Some("<title>About</title>"));
//!
//! cache.clear()?;
//! ```

mod error;
mod key;
mod namespace;
mod store;

pub use error::*;
pub use key::*;
pub use namespace::*;
pub use store::*;
