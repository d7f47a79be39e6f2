//!
//! dotcollection: an insertion-ordered, nested key-value collection with dotted-path access.
//!
//! ## Core Concepts
//!
//! * **Values (`tree::Value`)**: A tree node. `Map` nodes are branches; everything else,
//!   `Null` and lists included, is a leaf.
//! * **Collections (`collection::Collection`)**: The container. Keys are resolved by an
//!   addressing strategy; writes report success as `bool` and can be disabled with `lock`.
//! * **Strategies (`strategy::Strategy`)**: How a key maps into the tree.
//!     * **Hierarchical**: `"app.name"` addresses `name` inside the `app` map.
//!     * **Flat**: `"app.name"` is a single literal top-level key.
//! * **Persistence (`persist::PersistentCollection`)**: Binds a flat collection to a named
//!   object in a `Storage` and keeps the two in step with `sync`.

pub mod collection;
pub mod constants;
pub mod path;
pub mod persist;
pub mod strategy;
pub mod tree;

pub use collection::{Collection, CollectionBuilder, CollectionError};
pub use persist::{
    Codec, FileStorage, JsonCodec, MemoryStorage, PersistError, PersistentCollection, Storage,
};
pub use strategy::{Addressing, Strategy};
pub use tree::{Map, Value};

/// Result type used throughout the dotcollection library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotcollection library.
///
/// Each variant wraps the structured error of one module. Use the `is_*`
/// helpers rather than matching on variants where possible.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured collection errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),

    /// Structured persistence errors from the persist module
    #[error(transparent)]
    Persist(persist::PersistError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
            Error::Persist(_) => "persist",
        }
    }

    /// Check if this error indicates a key or storage object was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_not_found(),
            Error::Persist(err) => err.is_not_found(),
        }
    }

    /// Check if this error comes from misconfiguration (unknown strategy, bad
    /// storage name, unsupported strategy for persistence).
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_configuration_error(),
            Error::Persist(err) => err.is_configuration_error(),
        }
    }

    /// Check if this error is a type mismatch on a typed read.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_type_error(),
            Error::Persist(_) => false,
        }
    }

    /// Check if this error is an encoding or decoding failure.
    pub fn is_codec_error(&self) -> bool {
        match self {
            Error::Persist(err) => err.is_codec_error(),
            Error::Collection(_) => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Persist(err) => err.is_io_error(),
            Error::Collection(_) => false,
        }
    }
}
