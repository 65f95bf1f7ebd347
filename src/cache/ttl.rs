//! TTL Module
//!
//! Time-to-live values accepted by `set` and their resolution to seconds.

use std::time::Duration;

use chrono::TimeDelta;

// == Ttl ==
/// Explicit time-to-live for a `set` call.
///
/// Passing `None` instead of a `Ttl` selects the cache's default TTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Whole seconds, used as is (zero or negative expire immediately)
    Seconds(i64),
    /// A duration, truncated to its total whole seconds
    Duration(Duration),
}

impl Ttl {
    /// Returns the number of seconds to add to the current time.
    pub fn as_seconds(&self) -> i64 {
        match self {
            Ttl::Seconds(seconds) => *seconds,
            Ttl::Duration(duration) => i64::try_from(duration.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Resolves an optional TTL against `default_ttl`.
    pub fn resolve(ttl: Option<Ttl>, default_ttl: i64) -> i64 {
        ttl.map_or(default_ttl, |ttl| ttl.as_seconds())
    }
}

impl From<i64> for Ttl {
    fn from(seconds: i64) -> Self {
        Ttl::Seconds(seconds)
    }
}

impl From<u32> for Ttl {
    fn from(seconds: u32) -> Self {
        Ttl::Seconds(i64::from(seconds))
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Ttl::Duration(duration)
    }
}

impl From<TimeDelta> for Ttl {
    fn from(delta: TimeDelta) -> Self {
        Ttl::Seconds(delta.num_seconds())
    }
}
