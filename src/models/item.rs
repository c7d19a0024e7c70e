//! Enumeration result types
//!
//! Defines what `get_all` hands back to callers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A single `{key, data}` pair produced by enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheItem<T> {
    /// The entry key
    pub key: String,
    /// The deserialized value
    pub data: T,
}

impl<T> CacheItem<T> {
    /// Creates a new CacheItem
    pub fn new(key: impl Into<String>, data: T) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }
}

/// Result of enumerating a store.
///
/// Entries whose payload failed to deserialize are reported in `failures`
/// and never abort enumeration of the others.
#[derive(Debug)]
pub struct Listing<T> {
    /// Successfully decoded entries
    pub items: Vec<CacheItem<T>>,
    /// Per-entry decoding failures
    pub failures: Vec<StoreError>,
}

impl<T> Listing<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// True when every enumerated entry decoded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of decoded entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts into the decoded entries, failing with the first per-entry
    /// error if any entry could not be decoded.
    pub fn into_result(self) -> Result<Vec<CacheItem<T>>> {
        match self.failures.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.items),
        }
    }
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_item_serialize() {
        let item = CacheItem::new("test0", serde_json::json!({"a": "test0"}));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"key":"test0","data":{"a":"test0"}}"#);
    }

    #[test]
    fn test_listing_complete() {
        let mut listing = Listing::new();
        listing.items.push(CacheItem::new("a", 1));

        assert!(listing.is_complete());
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.into_result().unwrap(), vec![CacheItem::new("a", 1)]);
    }

    #[test]
    fn test_listing_with_failure() {
        let mut listing: Listing<i32> = Listing::new();
        listing.items.push(CacheItem::new("ok", 1));
        listing.failures.push(StoreError::Deserialization {
            key: "bad".to_string(),
            source: serde_json::from_str::<i32>("x").unwrap_err(),
        });

        assert!(!listing.is_complete());
        let err = listing.into_result().unwrap_err();
        assert_eq!(err.key(), "bad");
    }
}
