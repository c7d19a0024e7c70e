//! Memory Store - An in-process key-value cache store
//!
//! Provides bounded-capacity storage with LRU eviction and lazy TTL expiration,
//! usable as the memory backend of a caching facade.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use backend::CacheBackend;
pub use cache::{CacheStats, LruCache, MemoryStore};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use models::{CacheItem, Listing};
