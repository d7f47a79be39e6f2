//! Error types for collection configuration and typed access.
//!
//! Routine data-path outcomes (locked writes, path conflicts, absent keys) are not
//! errors: they are reported through `bool` and `Option` return values. The
//! variants here cover typed reads and configuration mistakes.

use thiserror::Error;

/// Structured errors for collection operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// A stored value does not have the requested type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A key required by a typed read is absent
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// A strategy name in configuration does not name a known strategy
    #[error("Unknown addressing strategy: {name}")]
    UnknownStrategy { name: String },
}

impl CollectionError {
    /// Check if this error indicates a key was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::KeyNotFound { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, CollectionError::TypeMismatch { .. })
    }

    /// Check if this error comes from invalid configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CollectionError::UnknownStrategy { .. })
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            CollectionError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
