//! Cache Module
//!
//! Provides in-memory storage with lazy TTL expiration and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use lru::{Iter, LruCache};
pub use stats::{CacheStats, Lookup};
pub use store::MemoryStore;
