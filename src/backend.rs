//! Cache capability shared by every tier.
//!
//! [`InMemoryCache`](crate::InMemoryCache), [`CompositeCache`](crate::CompositeCache)
//! and [`SharedCache`](crate::SharedCache) all implement [`Cache`], and the
//! composite only talks to its tiers through `Box<dyn Cache<V>>`. A backend
//! that talks to an external store implements the same trait.

use indexmap::IndexMap;

use crate::cache::Ttl;
use crate::error::Result;

/// Key/value cache operations.
///
/// Bulk methods have default implementations that apply the single-key
/// operation once per key. They are not atomic: every key is attempted, keys
/// already applied stay applied, and the first error is returned once all
/// keys have been tried.
pub trait Cache<V: Clone> {
    /// Returns the value at `key` if present and still valid.
    fn get(&mut self, key: &str) -> Result<Option<V>>;

    /// Stores `value` at `key`. `None` selects the cache's default TTL.
    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<()>;

    /// Removes `key`. Deleting an absent key succeeds.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Removes every key.
    fn clear(&mut self) -> Result<()>;

    /// Returns true if `key` is present and still valid, without counting a read.
    fn has(&self, key: &str) -> Result<bool>;

    /// Returns the value at `key`, or `default` when absent or expired.
    fn get_or(&mut self, key: &str, default: V) -> Result<V> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Looks up each key, keeping the caller's key order in the result.
    fn get_multiple(&mut self, keys: &[&str], default: V) -> Result<IndexMap<String, V>> {
        let mut values = IndexMap::with_capacity(keys.len());
        for key in keys {
            let value = self.get_or(key, default.clone())?;
            values.insert((*key).to_string(), value);
        }
        Ok(values)
    }

    /// Stores every pair with the same TTL.
    fn set_multiple(&mut self, entries: Vec<(String, V)>, ttl: Option<Ttl>) -> Result<()> {
        let mut outcome = Ok(());
        for (key, value) in entries {
            let result = self.set(&key, value, ttl);
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome
    }

    /// Removes every key.
    fn delete_multiple(&mut self, keys: &[&str]) -> Result<()> {
        let mut outcome = Ok(());
        for key in keys {
            let result = self.delete(key);
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome
    }
}

impl<V: Clone, C: Cache<V> + ?Sized> Cache<V> for Box<C> {
    fn get(&mut self, key: &str) -> Result<Option<V>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<()> {
        (**self).set(key, value, ttl)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn has(&self, key: &str) -> Result<bool> {
        (**self).has(key)
    }

    fn get_multiple(&mut self, keys: &[&str], default: V) -> Result<IndexMap<String, V>> {
        (**self).get_multiple(keys, default)
    }

    fn set_multiple(&mut self, entries: Vec<(String, V)>, ttl: Option<Ttl>) -> Result<()> {
        (**self).set_multiple(entries, ttl)
    }

    fn delete_multiple(&mut self, keys: &[&str]) -> Result<()> {
        (**self).delete_multiple(keys)
    }
}
