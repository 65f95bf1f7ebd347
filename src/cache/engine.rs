//! Cache Engine Module
//!
//! Bounded in-memory cache combining the entry store, the clock and the
//! eviction policy.

use std::sync::Arc;

use tracing::{debug, info};

use crate::backend::Cache;
use crate::cache::{select_victim, CacheEntry, CacheStats, EntryStore, EvictionReason, Ttl};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == In-Memory Cache ==
/// Bounded key/value cache with lazy TTL expiry and least-accessed eviction.
///
/// Expired entries are never swept in the background; they are dropped when
/// a read finds them or when eviction picks them.
#[derive(Debug)]
pub struct InMemoryCache<V> {
    /// Key-value storage in insertion order
    store: EntryStore<V>,
    /// Time source for expiry decisions
    clock: Arc<dyn Clock>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: i64,
}

impl<V> InMemoryCache<V> {
    // == Constructor ==
    /// Creates a cache using the system clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    /// * `default_ttl` - Default TTL in seconds, at least 1
    pub fn new(capacity: usize, default_ttl: i64) -> Result<Self> {
        Self::with_clock(capacity, default_ttl, Arc::new(SystemClock))
    }

    /// Creates a cache that reads the current time from `clock`.
    pub fn with_clock(capacity: usize, default_ttl: i64, clock: Arc<dyn Clock>) -> Result<Self> {
        CacheConfig {
            capacity,
            default_ttl,
        }
        .validate()?;

        info!(capacity, default_ttl, "In-memory cache created");

        Ok(Self {
            store: EntryStore::new(),
            clock,
            stats: CacheStats::new(),
            capacity,
            default_ttl,
        })
    }

    /// Creates a cache from configuration using the system clock.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity, config.default_ttl)
    }

    // == Insert ==
    /// Stores `value` at `key`, evicting one entry first if the cache is full.
    ///
    /// Eviction runs whenever the store is at capacity, even when `key`
    /// already exists.
    pub fn insert(&mut self, key: &str, value: V, ttl: Option<Ttl>) {
        let now = self.clock.now();

        if self.store.count() >= self.capacity {
            self.evict(now);
        }

        let expires_at = now.saturating_add(Ttl::resolve(ttl, self.default_ttl));
        self.store.set(key, CacheEntry::new(value, expires_at));
        self.stats.set_total_entries(self.store.count());
    }

    // == Evict ==
    fn evict(&mut self, now: i64) {
        let Some(victim) = select_victim(&self.store, now) else {
            return;
        };

        self.store.delete(&victim.key);
        self.stats.record_eviction();

        match victim.reason {
            EvictionReason::Expired => debug!(key = %victim.key, "Evicted expired entry"),
            EvictionReason::LeastAccessed => {
                debug!(key = %victim.key, "Evicted least accessed entry")
            }
        }
    }

    // == Contains ==
    /// Returns true if `key` is present and valid. Never counts a read.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.store
            .get(key)
            .is_some_and(|entry| entry.is_valid_at(now))
    }

    // == Remove ==
    /// Removes `key` if present.
    pub fn remove(&mut self, key: &str) {
        self.store.delete(key);
        self.stats.set_total_entries(self.store.count());
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear_all(&mut self) {
        let removed = self.store.count();
        self.store.clear();
        self.stats.set_total_entries(0);
        debug!(removed, "Cache cleared");
    }

    /// Returns the number of reads recorded for `key`, without counting one.
    pub fn access_count(&self, key: &str) -> Option<u64> {
        self.store.get(key).map(CacheEntry::access_count)
    }

    /// Returns stored keys in iteration order, including expired ones not yet removed.
    pub fn keys(&self) -> Vec<String> {
        self.store.iter().map(|(key, _)| key.to_string()).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.store.count());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.store.count()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Default TTL ==
    /// Returns the TTL in seconds applied when `set` gets no TTL.
    pub fn default_ttl(&self) -> i64 {
        self.default_ttl
    }
}

impl<V: Clone> InMemoryCache<V> {
    // == Lookup ==
    /// Returns the value at `key` if valid, counting one read.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn lookup(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();

        let Some(entry) = self.store.get_mut(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_valid_at(now) {
            let value = entry.read().clone();
            self.stats.record_hit();
            return Some(value);
        }

        self.store.delete(key);
        self.stats.record_miss();
        self.stats.record_expired_removal();
        self.stats.set_total_entries(self.store.count());
        debug!(key, "Removed expired entry on read");
        None
    }
}

impl<V: Clone> Cache<V> for InMemoryCache<V> {
    fn get(&mut self, key: &str) -> Result<Option<V>> {
        Ok(self.lookup(key))
    }

    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<()> {
        self.insert(key, value, ttl);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clear_all();
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.contains(key))
    }
}
