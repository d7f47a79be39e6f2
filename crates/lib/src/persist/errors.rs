//! Error types for the persistence bridge.

use thiserror::Error;

use crate::strategy::Strategy;

/// Errors that can occur while attaching or syncing a collection to storage.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistError {
    /// The storage object does not exist and no reset was requested.
    #[error("Storage object '{name}' does not exist, attach with reset = true to create it")]
    StorageUnavailable {
        /// Name of the missing storage object
        name: String,
    },

    /// `sync` was called before `attach`.
    #[error("No storage object attached, call attach() first")]
    NotAttached,

    /// Persistence only supports flat addressing.
    #[error("Persistence requires flat addressing, got {strategy}")]
    UnsupportedStrategy {
        /// The strategy of the rejected collection
        strategy: Strategy,
    },

    /// The storage object name is not acceptable to the storage.
    #[error("Invalid storage object name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Decoded content is valid but is not a mapping.
    #[error("Stored document is not a mapping, found {found}")]
    NotAMap {
        /// Type name of the decoded top-level value
        found: &'static str,
    },

    /// Encoding failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Decoding failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Storage I/O error.
    #[error("Storage I/O error on '{name}'")]
    Io {
        /// Name of the storage object being accessed
        name: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl PersistError {
    /// Check if this error indicates the storage object was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistError::StorageUnavailable { .. })
    }

    /// Check if this error comes from misconfiguration rather than runtime state
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PersistError::UnsupportedStrategy { .. }
                | PersistError::NotAttached
                | PersistError::InvalidName { .. }
        )
    }

    /// Check if this error is related to encoding or decoding
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            PersistError::SerializationFailed { .. }
                | PersistError::DeserializationFailed { .. }
                | PersistError::NotAMap { .. }
        )
    }

    /// Check if this error is I/O related
    pub fn is_io_error(&self) -> bool {
        matches!(self, PersistError::Io { .. })
    }

    /// Get the storage object name if the error carries one
    pub fn name(&self) -> Option<&str> {
        match self {
            PersistError::StorageUnavailable { name }
            | PersistError::InvalidName { name, .. }
            | PersistError::Io { name, .. } => Some(name),
            _ => None,
        }
    }
}

// Conversion from PersistError to the main Error type
impl From<PersistError> for crate::Error {
    fn from(err: PersistError) -> Self {
        crate::Error::Persist(err)
    }
}
