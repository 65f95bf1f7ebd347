//! Two-tier cache that puts a fast cache in front of a slow one.
//!
//! # Read Strategy
//! 1. Fast tier has the key: return it from the fast tier
//! 2. Otherwise read the slow tier; on a hit copy the value into the fast tier
//! 3. Miss in both: return None
//!
//! A miss in both tiers writes nothing to the fast tier. The default a caller
//! passes to [`Cache::get_or`] or [`Cache::get_multiple`] is never stored.
//!
//! The copy into the fast tier is best-effort and uses the fast tier's
//! default TTL, not the time the slow entry has left. A repopulated value can
//! therefore outlive the slow-tier entry it came from.
//!
//! # Write Strategy
//! Writes, deletes and clears go to the slow tier first, then the fast tier.
//! The first failure stops the operation and is returned.

use indexmap::IndexMap;
use tracing::warn;

use crate::backend::Cache;
use crate::cache::Ttl;
use crate::error::Result;

/// Cache composed of a fast tier and a slow tier.
///
/// Both tiers are only reached through the [`Cache`] trait.
pub struct CompositeCache<V: Clone> {
    /// Checked first on reads, refilled from the slow tier
    fast: Box<dyn Cache<V>>,
    /// Source of truth for writes
    slow: Box<dyn Cache<V>>,
}

impl<V: Clone> CompositeCache<V> {
    // == Constructor ==
    /// Creates a composite that reads `fast` before `slow`.
    pub fn new(fast: Box<dyn Cache<V>>, slow: Box<dyn Cache<V>>) -> Self {
        Self { fast, slow }
    }
}

impl<V: Clone> Cache<V> for CompositeCache<V> {
    fn get(&mut self, key: &str) -> Result<Option<V>> {
        if self.fast.has(key)? {
            return self.fast.get(key);
        }

        let value = self.slow.get(key)?;
        if let Some(value) = &value {
            if let Err(err) = self.fast.set(key, value.clone(), None) {
                warn!(key, error = %err, "Failed to populate fast cache tier");
            }
        }
        Ok(value)
    }

    fn set(&mut self, key: &str, value: V, ttl: Option<Ttl>) -> Result<()> {
        self.slow.set(key, value.clone(), ttl)?;
        self.fast.set(key, value, ttl)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.slow.delete(key)?;
        self.fast.delete(key)
    }

    fn clear(&mut self) -> Result<()> {
        self.slow.clear()?;
        self.fast.clear()
    }

    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.fast.has(key)? || self.slow.has(key)?)
    }

    fn get_multiple(&mut self, keys: &[&str], default: V) -> Result<IndexMap<String, V>> {
        let mut values = IndexMap::with_capacity(keys.len());
        for key in keys {
            let value = self.get(key)?.unwrap_or_else(|| default.clone());
            values.insert((*key).to_string(), value);
        }
        Ok(values)
    }

    fn set_multiple(&mut self, entries: Vec<(String, V)>, ttl: Option<Ttl>) -> Result<()> {
        self.slow.set_multiple(entries.clone(), ttl)?;
        self.fast.set_multiple(entries, ttl)
    }

    fn delete_multiple(&mut self, keys: &[&str]) -> Result<()> {
        self.slow.delete_multiple(keys)?;
        self.fast.delete_multiple(keys)
    }
}
