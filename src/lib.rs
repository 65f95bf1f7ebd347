//! Mini Cache - A bounded in-process key/value cache
//!
//! Provides TTL expiry with lazy removal, least-accessed eviction when full,
//! and a two-tier composite over any [`Cache`] implementation.
//!
//! ```
//! use mini_cache::{Cache, InMemoryCache, Ttl};
//!
//! let mut cache = InMemoryCache::<i32>::new(2, 60).unwrap();
//! cache.set("a", 1, None).unwrap();
//! cache.set("b", 2, Some(Ttl::Seconds(5))).unwrap();
//! assert_eq!(cache.get_or("a", 0).unwrap(), 1);
//! assert_eq!(cache.get_or("missing", 0).unwrap(), 0);
//! ```

pub mod backend;
pub mod cache;
pub mod clock;
pub mod composite;
pub mod config;
pub mod error;
pub mod shared;

pub use backend::Cache;
pub use cache::{CacheStats, InMemoryCache, Ttl};
pub use clock::{Clock, ManualClock, ScriptedClock, SystemClock};
pub use composite::CompositeCache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
