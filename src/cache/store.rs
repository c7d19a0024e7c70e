//! Cache Store Module
//!
//! Main store engine combining the LRU container with lazy TTL expiration.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats, Lookup, LruCache};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{CacheItem, Listing};

/// State guarded by the store lock.
#[derive(Debug)]
struct Inner {
    entries: LruCache<String, CacheEntry>,
    stats: CacheStats,
}

// == Memory Store ==
/// In-process key-value store with LRU eviction and lazy TTL expiration.
///
/// Values are serialized to JSON on `set` and deserialized on `get`; callers
/// only ever receive copies. Expired entries are treated as absent and purged
/// when next touched, never by a background sweep.
///
/// All state sits behind a single lock, so one instance can be shared across
/// threads as `Arc<MemoryStore>`:
///
/// ```
/// use memory_store::MemoryStore;
///
/// let store = MemoryStore::new(2);
/// store.set("a", Some(1), None).unwrap();
/// store.set("b", Some(2), None).unwrap();
/// store.set("c", Some(3), None).unwrap();
///
/// assert_eq!(store.get::<i32>("a").unwrap(), None);
/// assert_eq!(store.get::<i32>("b").unwrap(), Some(2));
/// assert_eq!(store.get::<i32>("c").unwrap(), Some(3));
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    /// TTL in seconds used when `set` receives none (or zero)
    default_ttl: i64,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a store holding at most `capacity` entries, with the default TTL.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(&StoreConfig::default().with_capacity(capacity))
    }

    /// Creates a store from configuration.
    pub fn with_config(config: &StoreConfig) -> Self {
        let capacity = config.effective_capacity();
        let default_ttl = config.effective_default_ttl();
        debug!(capacity, default_ttl, "memory store initialized");

        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                stats: CacheStats::new(),
            }),
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves and deserializes the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or expired; an expired entry
    /// is removed in the same critical section that found it. A hit marks the
    /// entry as most recently used, but never extends its TTL.
    ///
    /// # Errors
    /// [`StoreError::Deserialization`] if the stored payload does not decode
    /// into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let payload = {
            let mut guard = self.inner.lock();
            let Inner { entries, stats } = &mut *guard;
            let now = current_timestamp_ms();

            let live = match entries.get(key) {
                None => {
                    stats.record_lookup(Lookup::Miss);
                    return Ok(None);
                }
                Some(entry) if entry.is_expired_at(now) => None,
                Some(entry) => Some(entry.payload.clone()),
            };

            let Some(payload) = live else {
                entries.remove(key);
                stats.record_lookup(Lookup::Expired);
                stats.set_total_entries(entries.len());
                trace!(key, "purged expired entry on access");
                return Ok(None);
            };

            stats.record_lookup(Lookup::Hit);
            payload
        };

        serde_json::from_slice(&payload)
            .map(Some)
            .map_err(|source| StoreError::Deserialization {
                key: key.to_string(),
                source,
            })
    }

    // == Set ==
    /// Serializes and stores `value` under `key`, expiring `ttl` seconds from now.
    ///
    /// - `ttl` of `None` or `Some(0)` uses the default TTL (60 seconds unless
    ///   configured otherwise).
    /// - A negative `ttl` stores an entry that is already expired.
    /// - A `value` of `None` is a no-op that returns `Ok(None)`; store JSON
    ///   `null` with `Some(serde_json::Value::Null)` instead.
    ///
    /// An existing entry is overwritten, its expiry refreshed and it becomes
    /// most recently used. Inserting a new key at capacity evicts the least
    /// recently used entry, live or expired. Returns the value on success.
    ///
    /// # Errors
    /// [`StoreError::Serialization`] if `value` cannot be serialized; nothing
    /// is written in that case.
    pub fn set<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: Option<T>,
        ttl: Option<i64>,
    ) -> Result<Option<T>> {
        let Some(value) = value else {
            return Ok(None);
        };

        let key = key.into();
        let payload = serde_json::to_vec(&value).map_err(|source| StoreError::Serialization {
            key: key.clone(),
            source,
        })?;

        let ttl = match ttl {
            Some(ttl) if ttl != 0 => ttl,
            _ => self.default_ttl,
        };
        let entry = CacheEntry::new(payload, ttl);

        let mut guard = self.inner.lock();
        let Inner { entries, stats } = &mut *guard;
        if let Some((evicted, _)) = entries.put(key, entry) {
            stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used entry");
        }
        stats.set_total_entries(entries.len());

        Ok(Some(value))
    }

    // == Delete ==
    /// Removes the entry under `key`; no-op if absent.
    ///
    /// The entry leaves the container immediately, so it no longer shows up
    /// in [`get_all`](Self::get_all) either.
    pub fn del(&self, key: &str) {
        let mut guard = self.inner.lock();
        let Inner { entries, stats } = &mut *guard;
        if entries.remove(key).is_some() {
            stats.set_total_entries(entries.len());
            trace!(key, "deleted entry");
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        let mut guard = self.inner.lock();
        let Inner { entries, stats } = &mut *guard;
        let dropped = entries.len();
        entries.reset();
        stats.set_total_entries(0);
        debug!(dropped, "cleared memory store");
    }

    // == Get All ==
    /// Enumerates every live entry, deserializing each payload into `T`.
    ///
    /// Expired entries are purged and left out, the same as `get` would.
    /// Entries failing to decode land in [`Listing::failures`] without
    /// stopping the enumeration. Order is unspecified and enumeration does
    /// not change recency.
    pub fn get_all<T: DeserializeOwned>(&self) -> Listing<T> {
        let mut guard = self.inner.lock();
        let Inner { entries, stats } = &mut *guard;
        let now = current_timestamp_ms();

        let mut listing = Listing::new();
        let mut expired = Vec::new();

        for (key, entry) in entries.iter() {
            if entry.is_expired_at(now) {
                expired.push(key.clone());
                continue;
            }
            match entry.decode() {
                Ok(data) => listing.items.push(CacheItem::new(key.clone(), data)),
                Err(source) => listing.failures.push(StoreError::Deserialization {
                    key: key.clone(),
                    source,
                }),
            }
        }

        if !expired.is_empty() {
            for key in &expired {
                entries.remove(key);
            }
            stats.record_purged(expired.len());
            stats.set_total_entries(entries.len());
            trace!(purged = expired.len(), "purged expired entries during enumeration");
        }

        listing
    }

    // == Inspection ==
    /// Checks if `key` holds a live entry, without touching recency.
    pub fn contains_key(&self, key: &str) -> bool {
        let guard = self.inner.lock();
        guard
            .entries
            .peek(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    /// Returns the remaining TTL of `key` in milliseconds, without touching
    /// recency. `None` if the key is absent or expired.
    pub fn ttl(&self, key: &str) -> Option<u64> {
        let guard = self.inner.lock();
        guard
            .entries
            .peek(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining_ms)
    }

    /// Returns current store statistics.
    pub fn stats(&self) -> CacheStats {
        let guard = self.inner.lock();
        let mut stats = guard.stats.clone();
        stats.set_total_entries(guard.entries.len());
        stats
    }

    /// Returns the number of entries in the container, including expired
    /// entries which have not been touched yet.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().entries.capacity()
    }
}

#[cfg(test)]
impl MemoryStore {
    /// Stores raw payload bytes under `key`, bypassing serialization.
    pub(crate) fn insert_raw(&self, key: &str, payload: &[u8]) {
        self.inner
            .lock()
            .entries
            .put(key.to_string(), CacheEntry::new(payload.to_vec(), 60));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_config(&StoreConfig::default())
    }
}
