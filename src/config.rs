//! Configuration Module
//!
//! Handles loading and validating cache configuration.

use std::env;

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Values can be loaded from environment variables with sensible defaults,
/// or deserialized as part of a host application's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: i64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 60)
    ///
    /// Missing or unparsable values fall back to the defaults. The result is
    /// not validated; construction of the cache does that.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            capacity: lookup("CACHE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            default_ttl: lookup("CACHE_DEFAULT_TTL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
        }
    }

    /// Rejects a capacity or default TTL below 1.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            return Err(CacheError::Config(format!(
                "capacity must be at least 1, got {}",
                self.capacity
            )));
        }
        if self.default_ttl < 1 {
            return Err(CacheError::Config(format!(
                "default TTL must be at least 1 second, got {}",
                self.default_ttl
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            default_ttl: 60,
        }
    }
}
