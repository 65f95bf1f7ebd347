//! Eviction Module
//!
//! Chooses which entry to drop when the cache is full.

use crate::cache::EntryStore;

// == Eviction Reason ==
/// Why a victim was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionReason {
    /// The entry had already expired
    Expired,
    /// The entry had the fewest reads among live entries
    LeastAccessed,
}

// == Victim ==
/// The entry selected for eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Victim {
    pub key: String,
    pub reason: EvictionReason,
}

// == Select Victim ==
/// Scans the store once in insertion order and picks an eviction victim.
///
/// The first expired entry wins immediately. Otherwise the live entry with the
/// smallest access count is chosen, ties going to the earliest inserted.
/// Reads counts through the accessor only, so scanning never counts as an access.
/// Returns `None` only for an empty store.
pub fn select_victim<V>(store: &EntryStore<V>, now: i64) -> Option<Victim> {
    let mut best: Option<(&str, u64)> = None;

    for (key, entry) in store.iter() {
        if !entry.is_valid_at(now) {
            return Some(Victim {
                key: key.to_string(),
                reason: EvictionReason::Expired,
            });
        }

        let score = entry.access_count();
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((key, score));
        }
    }

    best.map(|(key, _)| Victim {
        key: key.to_string(),
        reason: EvictionReason::LeastAccessed,
    })
}
