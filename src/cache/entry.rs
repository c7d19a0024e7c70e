//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;

// == Cache Entry ==
/// Represents a single cache entry with its serialized payload and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized value (JSON bytes)
    pub payload: Vec<u8>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    ///
    /// A negative TTL yields an entry that is already expired.
    ///
    /// # Arguments
    /// * `payload` - The serialized value to store
    /// * `ttl_seconds` - TTL in seconds, may be negative
    pub fn new(payload: Vec<u8>, ttl_seconds: i64) -> Self {
        let now = current_timestamp_ms();
        Self {
            payload,
            created_at: now,
            expires_at: now.saturating_add_signed(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the given instant.
    ///
    /// Boundary condition: the entry is expired once `now >= expires_at`.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Checks if the entry has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }

    // == Decode ==
    /// Deserializes the payload into a value.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.payload)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A clock set before the epoch reads as `0`.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
