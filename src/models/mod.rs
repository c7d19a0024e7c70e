//! Value models handed out by the store
//!
//! This module defines the types returned when enumerating a store.

pub mod item;

// Re-export commonly used types
pub use item::{CacheItem, Listing};
