//! Entry Store Module
//!
//! Insertion-ordered mapping from key to cache entry.

use hashlink::LinkedHashMap;

use crate::cache::CacheEntry;

// == Entry Store ==
/// Holds at most one entry per key, iterated in insertion order.
///
/// Replacing an existing key keeps its position; only a delete followed by a
/// set moves it to the back. Lookups, inserts and deletes are O(1) expected.
#[derive(Debug)]
pub struct EntryStore<V> {
    entries: LinkedHashMap<String, CacheEntry<V>>,
}

impl<V> EntryStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: LinkedHashMap::new(),
        }
    }

    // == Set ==
    /// Inserts or replaces the entry at `key`.
    pub fn set(&mut self, key: &str, entry: CacheEntry<V>) {
        if let Some(slot) = self.entries.get_mut(key) {
            *slot = entry;
        } else {
            self.entries.insert(key.to_string(), entry);
        }
    }

    // == Get ==
    /// Returns the entry at `key`, if any.
    pub fn get(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Returns the entry at `key` for reading through [`CacheEntry::read`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut CacheEntry<V>> {
        self.entries.get_mut(key)
    }

    // == Delete ==
    /// Removes `key` if present, keeping the order of the remaining keys.
    pub fn delete(&mut self, key: &str) -> Option<CacheEntry<V>> {
        self.entries.remove(key)
    }

    // == Clear ==
    /// Removes all keys.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Count ==
    /// Returns the number of stored entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Iterate ==
    /// Iterates over `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheEntry<V>)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<V> Default for EntryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
