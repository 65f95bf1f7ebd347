//! Cache Module
//!
//! Provides the bounded in-memory cache engine with TTL expiry and
//! least-accessed eviction.

mod engine;
mod entry;
mod eviction;
mod stats;
mod store;
mod ttl;


// Re-export public types
pub use engine::InMemoryCache;
pub use entry::CacheEntry;
pub use eviction::{select_victim, EvictionReason, Victim};
pub use stats::CacheStats;
pub use store::EntryStore;
pub use ttl::Ttl;
