//! Clock Module
//!
//! Time sources used to decide whether a cache entry is still valid.
//!
//! Every cache takes its clock at construction, so tests can freeze or
//! script time instead of sleeping.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

// == Clock Trait ==
/// Supplies the current time as a Unix timestamp in seconds.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current timestamp.
    fn now(&self) -> i64;
}

// == System Clock ==
/// Wall clock backed by the host's system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

// == Manual Clock ==
/// Clock frozen at a given timestamp until moved explicitly.
///
/// Clones share the same underlying time, so a test can keep one handle
/// and give another to the cache.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `now`.
    pub fn new(now: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now)),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward by `seconds`.
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// == Scripted Clock ==
/// Clock that replays a fixed sequence of timestamps, one per call.
///
/// Once the script is exhausted the last timestamp is repeated. An empty
/// script always reports 0.
#[derive(Debug, Default)]
pub struct ScriptedClock {
    script: Mutex<Script>,
}

#[derive(Debug, Default)]
struct Script {
    pending: VecDeque<i64>,
    last: i64,
}

impl ScriptedClock {
    /// Creates a clock that returns `timestamps` in order.
    pub fn new(timestamps: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: Mutex::new(Script {
                pending: timestamps.into_iter().collect(),
                last: 0,
            }),
        }
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> i64 {
        let mut script = self
            .script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(next) = script.pending.pop_front() {
            script.last = next;
        }
        script.last
    }
}
