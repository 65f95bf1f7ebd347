//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for every cache tier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity or default TTL rejected at construction
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Key that a backend cannot accept
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A backing cache failed to apply an operation
    #[error("Backend error: {0}")]
    Backend(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
