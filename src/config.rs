//! Configuration Module
//!
//! Handles loading and managing store configuration from environment variables
//! or from an embedded options block.

use std::env;

use serde::Deserialize;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// TTL in seconds applied when a `set` omits one (or passes zero).
pub const DEFAULT_TTL_SECS: i64 = 60;

/// Store configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of entries the store can hold
    #[serde(alias = "count")]
    pub capacity: usize,
    /// Default TTL in seconds for entries set without an explicit TTL
    pub default_ttl: i64,
}

impl StoreConfig {
    /// Creates a new StoreConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMORY_STORE_CAPACITY` - Maximum entries (default: 100)
    /// - `MEMORY_STORE_DEFAULT_TTL` - Default TTL in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("MEMORY_STORE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            default_ttl: env::var("MEMORY_STORE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the default TTL in seconds.
    pub fn with_default_ttl(mut self, default_ttl: i64) -> Self {
        self.default_ttl = default_ttl;
        self
    }

    /// Capacity actually used by the store; never zero.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }

    /// Default TTL actually used by the store; non-positive values fall back
    /// to [`DEFAULT_TTL_SECS`].
    pub fn effective_default_ttl(&self) -> i64 {
        if self.default_ttl > 0 {
            self.default_ttl
        } else {
            DEFAULT_TTL_SECS
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            default_ttl: DEFAULT_TTL_SECS,
        }
    }
}
