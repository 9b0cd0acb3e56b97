//! Prefix-scoped view over a shared store.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::CacheResult;
use crate::key::{CacheKey, KEY_SEPARATOR};
use crate::store::CacheStore;

/// A namespace within a shared [`CacheStore`].
///
/// Every key is stored as `name \0 key`, so several subsystems can share one
/// store and [`Namespace::clear`] only touches this namespace's entries.
#[derive(Clone)]
pub struct Namespace {
    store: Arc<dyn CacheStore>,
    name: String,
    prefix: String,
}

impl Namespace {
    /// Scope `store` to `name`.
    pub fn new(store: Arc<dyn CacheStore>, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut prefix = name.clone();
        prefix.push(KEY_SEPARATOR);
        Self {
            store,
            name,
            prefix,
        }
    }

    /// Namespace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Store-level key for `key`.
    pub fn scoped_key(&self, key: &CacheKey) -> String {
        let mut scoped = String::with_capacity(self.prefix.len() + key.as_str().len());
        scoped.push_str(&self.prefix);
        scoped.push_str(key.as_str());
        scoped
    }

    /// Get a live value.
    pub fn get(&self, key: &CacheKey) -> CacheResult<Option<String>> {
        self.store.get(&self.scoped_key(key))
    }

    /// Store a value for `ttl`.
    pub fn set(&self, key: &CacheKey, value: &str, ttl: Duration) -> CacheResult<()> {
        self.store.set(&self.scoped_key(key), value, ttl)
    }

    /// Remove a value.
    pub fn delete(&self, key: &CacheKey) -> CacheResult<()> {
        self.store.delete(&self.scoped_key(key))
    }

    /// Remove every entry of this namespace, returning how many were removed.
    ///
    /// Entries written concurrently with the clear may survive it.
    pub fn clear(&self) -> CacheResult<usize> {
        let keys: Vec<String> = self
            .store
            .keys()?
            .into_iter()
            .filter(|key| key.starts_with(&self.prefix))
            .collect();
        for key in &keys {
            self.store.delete(key)?;
        }
        tracing::debug!(namespace = %self.name, removed = keys.len(), "cleared cache namespace");
        Ok(keys.len())
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_scoped_key_format() {
        let ns = Namespace::new(Arc::new(InMemoryStore::new()), "seo-meta");
        assert_eq!(
            ns.scoped_key(&CacheKey::tag_block("about", "en")),
            "seo-meta\0about\0en"
        );
    }

    #[test]
    fn test_get_set_delete() {
        let ns = Namespace::new(Arc::new(InMemoryStore::new()), "seo-meta");
        let key = CacheKey::tag_block("about", "en");

        assert_eq!(ns.get(&key).unwrap(), None);
        ns.set(&key, "block", TTL).unwrap();
        assert_eq!(ns.get(&key).unwrap().as_deref(), Some("block"));
        ns.delete(&key).unwrap();
        assert_eq!(ns.get(&key).unwrap(), None);
    }

    #[test]
    fn test_clear_leaves_other_namespaces() {
        let store: Arc<dyn CacheStore> = Arc::new(InMemoryStore::new());
        let seo = Namespace::new(Arc::clone(&store), "seo-meta");
        let other = Namespace::new(Arc::clone(&store), "seo-meta-2");
        let key = CacheKey::tag_block("about", "en");

        seo.set(&key, "a", TTL).unwrap();
        seo.set(&CacheKey::tag_block("about", "cs"), "b", TTL).unwrap();
        other.set(&key, "c", TTL).unwrap();
        store.set("unscoped", "d", TTL).unwrap();

        assert_eq!(seo.clear().unwrap(), 2);
        assert_eq!(seo.get(&key).unwrap(), None);
        assert_eq!(other.get(&key).unwrap().as_deref(), Some("c"));
        assert_eq!(store.get("unscoped").unwrap().as_deref(), Some("d"));
    }

    #[test]
    fn test_clear_empty_namespace() {
        let ns = Namespace::new(Arc::new(InMemoryStore::new()), "seo-meta");
        assert_eq!(ns.clear().unwrap(), 0);
    }
}
