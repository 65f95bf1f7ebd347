//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiry and access counting.

// == Cache Entry ==
/// A stored payload with its expiry timestamp and read counter.
///
/// The payload is immutable once stored. [`CacheEntry::read`] is the only way
/// to reach it and counts every call.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    value: V,
    /// Expiration timestamp (Unix seconds), valid while `expires_at >= now`
    expires_at: i64,
    /// Number of reads through [`CacheEntry::read`]
    access_count: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring at `expires_at` with no recorded reads.
    pub fn new(value: V, expires_at: i64) -> Self {
        Self {
            value,
            expires_at,
            access_count: 0,
        }
    }

    // == Read ==
    /// Counts one access and returns the payload.
    pub fn read(&mut self) -> &V {
        self.access_count += 1;
        &self.value
    }

    /// Returns the expiration timestamp.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Returns how many times the payload has been read.
    pub fn access_count(&self) -> u64 {
        self.access_count
    }

    // == Is Valid ==
    /// Checks whether the entry is still valid at `now`.
    ///
    /// Boundary condition: an entry expiring exactly at `now` is still valid.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at >= now
    }
}
