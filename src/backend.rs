//! Backend Contract Module
//!
//! The uniform get/set/del/clear/get_all contract a caching facade expects
//! from any backing store, whether in memory, a remote cache or a database.

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::MemoryStore;
use crate::error::Result;
use crate::models::Listing;

/// Storage backend consumed by a caching facade.
///
/// Values are dynamic JSON; `None` is the "no value" marker, distinct from
/// a stored JSON `null`. Misses and expired entries come back as `Ok(None)`.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Fetches the value under `key`.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key` for `ttl` seconds and echoes it back.
    ///
    /// A `None` value is a no-op. `ttl` of `None` or zero picks the backend
    /// default; a negative `ttl` stores an already-expired entry.
    async fn set(&self, key: &str, value: Option<Value>, ttl: Option<i64>)
        -> Result<Option<Value>>;

    /// Deletes the entry under `key`.
    async fn del(&self, key: &str) -> Result<()>;

    /// Deletes every entry.
    async fn clear(&self) -> Result<()>;

    /// Lists every live entry.
    async fn get_all(&self) -> Result<Listing<Value>>;
}

/// Completes `result` on the next scheduling opportunity, so callers never
/// see a result delivered re-entrantly inside their own call.
async fn deferred<T>(result: T) -> T {
    tokio::task::yield_now().await;
    result
}

#[async_trait]
impl CacheBackend for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        deferred(MemoryStore::get(self, key)).await
    }

    async fn set(
        &self,
        key: &str,
        value: Option<Value>,
        ttl: Option<i64>,
    ) -> Result<Option<Value>> {
        deferred(MemoryStore::set(self, key, value, ttl)).await
    }

    async fn del(&self, key: &str) -> Result<()> {
        MemoryStore::del(self, key);
        deferred(Ok(())).await
    }

    async fn clear(&self) -> Result<()> {
        MemoryStore::clear(self);
        deferred(Ok(())).await
    }

    async fn get_all(&self) -> Result<Listing<Value>> {
        deferred(Ok(MemoryStore::get_all(self))).await
    }
}
