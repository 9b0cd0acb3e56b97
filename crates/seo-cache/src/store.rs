//! Key-value store seam and the in-memory backend.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::error::CacheResult;

/// Key-value store holding string values with a time-to-live.
///
/// Implementations must be safe to share between request threads. Namespace
/// isolation is the caller's job (see [`crate::Namespace`]).
pub trait CacheStore: Send + Sync {
    /// Get a live value. Expired entries read as `None`.
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a value, replacing any previous one, for `ttl`.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> CacheResult<()>;

    /// All live keys.
    fn keys(&self) -> CacheResult<Vec<String>>;

    /// Remove every entry in the store.
    fn clear_all(&self) -> CacheResult<()>;
}

/// Longest TTL honoured; larger values are clamped so the deadline stays
/// representable.
pub const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 3600);

/// A stored value with its expiry deadline.
#[derive(Debug, Clone)]
pub struct CachedEntry {
    /// The cached content.
    pub value: String,
    /// Instant after which the entry is treated as absent.
    pub expires_at: Instant,
}

impl CachedEntry {
    /// Create an entry expiring `ttl` from now.
    pub fn new(value: impl Into<String>, ttl: Duration) -> Self {
        Self {
            value: value.into(),
            expires_at: Instant::now() + ttl.min(MAX_TTL),
        }
    }

    /// Check if the entry has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry.
    pub fn remaining_ttl(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// In-process store backed by a sharded concurrent map.
///
/// Expired entries are dropped lazily when read or listed, or eagerly with
/// [`InMemoryStore::purge_expired`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, CachedEntry>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let purged = before.saturating_sub(self.entries.len());
        if purged > 0 {
            tracing::debug!(purged, "evicted expired cache entries");
        }
        purged
    }

    /// Full entry for `key`, if live.
    pub fn entry(&self, key: &str) -> Option<CachedEntry> {
        let entry = self.entries.get(key)?;
        if entry.is_expired() {
            return None;
        }
        Some(entry.clone())
    }
}

impl CacheStore for InMemoryStore {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        // The read guard must be dropped before removing from the same shard.
        match self.entries.get(key) {
            None => return Ok(None),
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
            Some(_) => {}
        }
        self.entries.remove_if(key, |_, entry| entry.is_expired());
        tracing::trace!(key, "evicted expired cache entry");
        Ok(None)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.entries.insert(key.to_string(), CachedEntry::new(value, ttl));
        Ok(())
    }

    fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> CacheResult<Vec<String>> {
        self.purge_expired();
        Ok(self.entries.iter().map(|e| e.key().clone()).collect())
    }

    fn clear_all(&self) -> CacheResult<()> {
        self.entries.clear();
        Ok(())
    }
}
