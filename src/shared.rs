//! Shared Cache Module
//!
//! Lets several owners use one cache by guarding every call with a mutex.

use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;

use crate::backend::Cache;
use crate::cache::Ttl;
use crate::error::Result;

/// Cloneable handle to a cache behind one mutex.
///
/// Each operation holds the lock for its whole duration, bulk operations
/// included.
///
/// # Example
/// ```
/// use mini_cache::{Cache, InMemoryCache, SharedCache};
///
/// let cache = SharedCache::new(InMemoryCache::<u32>::new(100, 60).unwrap());
/// let mut writer = cache.clone();
/// writer.set("answer", 42, None).unwrap();
/// assert!(cache.has("answer").unwrap());
/// ```
#[derive(Debug)]
pub struct SharedCache<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> SharedCache<C> {
    /// Wraps `cache` for shared use.
    pub fn new(cache: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Locks the cache for direct access to its inherent methods.
    ///
    /// A poisoned lock is recovered: operations never leave the cache
    /// half-updated when they panic.
    pub fn lock(&self) -> MutexGuard<'_, C> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C> Clone for SharedCache<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Cache<V>, V: Clone> Cache<V> for SharedCache<C> {
    fn get(&mut self, key: &str) -> Result<Option<V>> {
        self.lock().get(key)
    }

    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<()> {
        self.lock().set(key, value, ttl)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.lock().delete(key)
    }

    fn clear(&mut self) -> Result<()> {
        self.lock().clear()
    }

    fn has(&self, key: &str) -> Result<bool> {
        self.lock().has(key)
    }

    fn get_multiple(&mut self, keys: &[&str], default: V) -> Result<IndexMap<String, V>> {
        self.lock().get_multiple(keys, default)
    }

    fn set_multiple(&mut self, entries: Vec<(String, V)>, ttl: Option<Ttl>) -> Result<()> {
        self.lock().set_multiple(entries, ttl)
    }

    fn delete_multiple(&mut self, keys: &[&str]) -> Result<()> {
        self.lock().delete_multiple(keys)
    }
}
