//! Error types for the memory store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the memory store.
///
/// Misses and expired entries are not errors: they surface as `Ok(None)`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Value could not be converted to its stored representation
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored payload could not be converted back to a value
    #[error("Failed to deserialize value for key '{key}': {source}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns the key of the entry the error relates to.
    pub fn key(&self) -> &str {
        match self {
            StoreError::Serialization { key, .. } => key,
            StoreError::Deserialization { key, .. } => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the memory store.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("not json").unwrap_err()
    }

    #[test]
    fn test_error_key() {
        let err = StoreError::Deserialization {
            key: "broken".to_string(),
            source: json_error(),
        };
        assert_eq!(err.key(), "broken");
    }

    #[test]
    fn test_error_display_mentions_key() {
        let err = StoreError::Serialization {
            key: "user:42".to_string(),
            source: json_error(),
        };
        let msg = err.to_string();
        assert!(msg.contains("serialize"));
        assert!(msg.contains("user:42"));
    }

    #[test]
    fn test_error_source_is_preserved() {
        use std::error::Error as _;

        let err = StoreError::Deserialization {
            key: "k".to_string(),
            source: json_error(),
        };
        assert!(err.source().is_some());
    }
}
