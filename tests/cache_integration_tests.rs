//! Integration Tests for the public cache API
//!
//! Exercises the in-memory engine, the composite wrapper and the shared
//! handle through the crate's public surface only.

use std::sync::{Arc, Once};

use mini_cache::{
    Cache, CacheConfig, CacheError, CompositeCache, InMemoryCache, ManualClock, Result,
    SharedCache, Ttl,
};

// == Helper Functions ==

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mini_cache=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

fn create_test_cache<V: Clone>(
    capacity: usize,
    default_ttl: i64,
) -> (InMemoryCache<V>, ManualClock) {
    init_tracing();
    let clock = ManualClock::new(1_000);
    let cache = InMemoryCache::with_clock(capacity, default_ttl, Arc::new(clock.clone())).unwrap();
    (cache, clock)
}

// == Engine Scenarios ==

#[test]
fn test_least_read_entry_is_evicted() {
    let (mut cache, _) = create_test_cache::<i32>(2, 60);

    cache.set("a", 1, None).unwrap();
    cache.set("b", 2, None).unwrap();
    cache.get("b").unwrap();
    cache.set("c", 3, None).unwrap();

    assert!(!cache.has("a").unwrap());
    assert!(cache.has("b").unwrap());
    assert!(cache.has("c").unwrap());
}

#[test]
fn test_expired_entry_is_evicted_before_popular_entries() {
    let (mut cache, clock) = create_test_cache::<&str>(3, 60);

    cache.set("hot", "h", None).unwrap();
    cache.set("short", "s", Some(Ttl::Seconds(1))).unwrap();
    cache.set("warm", "w", None).unwrap();
    for _ in 0..10 {
        cache.get("hot").unwrap();
        cache.get("short").unwrap();
    }

    clock.advance(2);
    cache.set("new", "n", None).unwrap();

    assert_eq!(cache.keys(), vec!["hot", "warm", "new"]);
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn test_round_trip_preserves_value() {
    let (mut cache, _) = create_test_cache::<Vec<String>>(10, 60);
    let value = vec!["nested".to_string(), "payload".to_string()];

    cache.set("list", value.clone(), None).unwrap();

    assert_eq!(cache.get("list").unwrap(), Some(value));
}

#[test]
fn test_ttl_from_chrono_and_std_durations() {
    let (mut cache, clock) = create_test_cache::<i32>(10, 60);

    cache
        .set("std", 1, Some(Ttl::from(std::time::Duration::from_secs(120))))
        .unwrap();
    cache
        .set("chrono", 2, Some(Ttl::from(chrono::TimeDelta::seconds(30))))
        .unwrap();

    clock.advance(30);
    assert!(cache.has("chrono").unwrap());
    clock.advance(1);
    assert!(!cache.has("chrono").unwrap());
    assert!(cache.has("std").unwrap());
}

#[test]
fn test_get_or_returns_default_after_expiry() {
    let (mut cache, clock) = create_test_cache::<&str>(10, 5);

    cache.set("key", "value", None).unwrap();
    clock.advance(6);

    assert_eq!(cache.get_or("key", "fallback").unwrap(), "fallback");
    assert!(cache.is_empty());
}

#[test]
fn test_invalid_configuration_is_rejected() {
    assert!(matches!(
        InMemoryCache::<u8>::new(0, 60),
        Err(CacheError::Config(_))
    ));
    assert!(matches!(
        InMemoryCache::<u8>::from_config(&CacheConfig {
            capacity: 10,
            default_ttl: 0,
        }),
        Err(CacheError::Config(_))
    ));
}

// == Composite Scenarios ==

type SharedTier = SharedCache<InMemoryCache<u32>>;

fn two_tier(
    fast_capacity: usize,
    fast_ttl: i64,
    slow_ttl: i64,
) -> (CompositeCache<u32>, SharedTier, SharedTier, ManualClock) {
    init_tracing();
    let clock = ManualClock::new(0);
    let fast = SharedCache::new(
        InMemoryCache::with_clock(fast_capacity, fast_ttl, Arc::new(clock.clone())).unwrap(),
    );
    let slow = SharedCache::new(
        InMemoryCache::with_clock(100, slow_ttl, Arc::new(clock.clone())).unwrap(),
    );
    let composite: CompositeCache<u32> =
        CompositeCache::new(Box::new(fast.clone()), Box::new(slow.clone()));
    (composite, fast, slow, clock)
}

#[test]
fn test_composite_writes_reach_both_tiers() {
    let (mut cache, fast, slow, _) = two_tier(10, 60, 600);

    cache.set("key", 7, None).unwrap();

    assert!(fast.has("key").unwrap());
    assert!(slow.has("key").unwrap());

    cache.delete("key").unwrap();
    assert!(!fast.has("key").unwrap());
    assert!(!slow.has("key").unwrap());
}

#[test]
fn test_composite_refills_fast_tier_from_slow() {
    let (mut cache, mut fast, mut slow, _) = two_tier(10, 60, 600);
    slow.set("key", 9, None).unwrap();

    assert_eq!(cache.get("key").unwrap(), Some(9));
    assert_eq!(fast.lock().access_count("key"), Some(0));

    assert_eq!(cache.get("key").unwrap(), Some(9));
    assert_eq!(fast.lock().access_count("key"), Some(1));
    assert_eq!(slow.lock().access_count("key"), Some(1));

    fast.clear().unwrap();
    assert!(cache.has("key").unwrap());
}

#[test]
fn test_composite_refill_uses_fast_default_ttl() {
    // slow entry expires at 10, the refilled fast copy gets the fast default of 60s
    let (mut cache, fast, mut slow, clock) = two_tier(10, 60, 600);
    slow.set("key", 1, Some(Ttl::Seconds(10))).unwrap();

    cache.get("key").unwrap();

    clock.set(11);
    assert!(!slow.has("key").unwrap());
    assert!(fast.has("key").unwrap(), "refilled copy outlives the slow entry");
    assert_eq!(cache.get("key").unwrap(), Some(1));
}

#[test]
fn test_composite_clear_and_bulk_operations() {
    let (mut cache, fast, slow, _) = two_tier(10, 60, 600);

    cache
        .set_multiple(
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)],
            Some(Ttl::Seconds(30)),
        )
        .unwrap();
    let values = cache.get_multiple(&["c", "a", "zz"], 0).unwrap();
    assert_eq!(
        values.into_iter().collect::<Vec<_>>(),
        vec![("c".to_string(), 3), ("a".to_string(), 1), ("zz".to_string(), 0)]
    );

    cache.delete_multiple(&["a", "b"]).unwrap();
    assert!(cache.has("c").unwrap());
    assert!(!cache.has("a").unwrap());

    cache.clear().unwrap();
    assert!(fast.lock().is_empty());
    assert!(slow.lock().is_empty());
}

/// Slow tier that refuses every write.
struct ReadOnlyCache;

impl Cache<u32> for ReadOnlyCache {
    fn get(&mut self, _key: &str) -> Result<Option<u32>> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: u32, _ttl: Option<Ttl>) -> Result<()> {
        Err(CacheError::Backend(format!("read-only, cannot set {key}")))
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        Err(CacheError::Backend(format!("read-only, cannot delete {key}")))
    }

    fn clear(&mut self) -> Result<()> {
        Err(CacheError::Backend("read-only, cannot clear".to_string()))
    }

    fn has(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }
}

#[test]
fn test_composite_slow_failure_leaves_fast_untouched() {
    let (fast_cache, _) = create_test_cache::<u32>(10, 60);
    let fast = SharedCache::new(fast_cache);
    let mut cache: CompositeCache<u32> =
        CompositeCache::new(Box::new(fast.clone()), Box::new(ReadOnlyCache));

    assert!(matches!(cache.set("key", 1, None), Err(CacheError::Backend(_))));
    assert!(!fast.has("key").unwrap());

    let result = cache.set_multiple(vec![("a".to_string(), 1), ("b".to_string(), 2)], None);
    assert!(matches!(result, Err(CacheError::Backend(msg)) if msg.contains("set a")));
    assert!(fast.lock().is_empty());
}
