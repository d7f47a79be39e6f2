//! Persistence bridge between a flat collection and a named storage object.
//!
//! A [`PersistentCollection`] wraps a flat-addressed [`Collection`] and binds it
//! to one object in a [`Storage`]. [`PersistentCollection::sync`] writes the
//! collection out through a [`Codec`] and reloads the written result, so the
//! in-memory view always matches what a fresh reader would see.
//!
//! ```
//! use dotcollection::{MemoryStorage, PersistentCollection};
//!
//! # fn main() -> dotcollection::Result<()> {
//! let mut config = PersistentCollection::new(MemoryStorage::new());
//! config.attach("config.json", true)?;
//!
//! config.set("app.name", "My App");
//! config.sync(false)?;
//!
//! assert_eq!(config.storage().get("config.json"), Some(&br#"{"app.name":"My App"}"#[..]));
//! # Ok(())
//! # }
//! ```

use std::ops::{Deref, DerefMut};

use tracing::{info, warn};

use crate::{
    Result,
    collection::Collection,
    strategy::Strategy,
    tree::Map,
};

mod codec;
mod errors;
mod storage;

pub use codec::{Codec, JsonCodec};
pub use errors::PersistError;
pub use storage::{FileStorage, MemoryStorage, Storage};

/// A flat collection synchronized with a storage object.
///
/// Reads and in-memory writes go through [`Deref`]/[`DerefMut`] to the wrapped
/// [`Collection`]; nothing reaches storage until [`sync`](Self::sync).
#[derive(Debug)]
pub struct PersistentCollection<S, C = JsonCodec> {
    collection: Collection,
    storage: S,
    codec: C,
    name: Option<String>,
}

impl<S: Storage> PersistentCollection<S> {
    /// Creates an empty, unattached collection using the JSON codec
    pub fn new(storage: S) -> Self {
        Self::with_codec(storage, JsonCodec::new())
    }

    /// Creates a collection and attaches it to `name` in one step
    pub fn open(storage: S, name: impl Into<String>, reset: bool) -> Result<Self> {
        let mut persistent = Self::new(storage);
        persistent.attach(name, reset)?;
        Ok(persistent)
    }
}

impl<S: Storage, C: Codec> PersistentCollection<S, C> {
    pub fn with_codec(storage: S, codec: C) -> Self {
        Self {
            collection: Collection::with_strategy(Strategy::Flat),
            storage,
            codec,
            name: None,
        }
    }

    /// Wraps an existing collection.
    ///
    /// Only flat collections can be persisted; any other strategy is rejected
    /// with [`PersistError::UnsupportedStrategy`].
    pub fn from_collection(collection: Collection, storage: S, codec: C) -> Result<Self> {
        if collection.strategy() != Strategy::Flat {
            return Err(PersistError::UnsupportedStrategy {
                strategy: collection.strategy(),
            }
            .into());
        }
        Ok(Self {
            collection,
            storage,
            codec,
            name: None,
        })
    }

    /// Binds this collection to the storage object `name` and syncs.
    ///
    /// If the object does not exist it is created empty when `reset` is `true`,
    /// otherwise [`PersistError::StorageUnavailable`] is returned and nothing is
    /// attached. The initial sync uses the same `reset` flag: with `reset` the
    /// stored content is replaced by this collection, without it the two are
    /// merged.
    pub fn attach(&mut self, name: impl Into<String>, reset: bool) -> Result<()> {
        self.ensure_flat()?;
        let name = name.into();
        if !self.storage.exists(&name)? {
            if !reset {
                return Err(PersistError::StorageUnavailable { name }.into());
            }
            let empty = self.codec.encode(&Map::new())?;
            self.storage.write(&name, &empty)?;
            info!(name = %name, "Created storage object");
        }

        self.name = Some(name);
        self.sync(reset)
    }

    /// Writes the collection to its storage object and reloads the result.
    ///
    /// With `reset` the stored content is replaced by the collection's
    /// entries. Without it the stored entries are loaded first and the
    /// collection's entries are laid over them, so stored keys missing from
    /// memory survive and in-memory values win on conflicts. Stored content
    /// that cannot be decoded into a mapping is treated as empty.
    ///
    /// The written bytes are always decoded back into memory, locked or not.
    /// The lock only guards the collection's own write methods.
    ///
    /// Fails with [`PersistError::UnsupportedStrategy`] if the wrapped
    /// collection has been swapped for one that is not flat.
    pub fn sync(&mut self, reset: bool) -> Result<()> {
        let name = self.name.clone().ok_or(PersistError::NotAttached)?;
        self.ensure_flat()?;

        let merged = if reset {
            self.collection.to_map()
        } else {
            let mut stored = self.load_stored(&name)?;
            stored.extend(
                self.collection
                    .iter()
                    .map(|(key, value)| (key, value.clone())),
            );
            stored
        };

        let bytes = self.codec.encode(&merged)?;
        self.storage.write(&name, &bytes)?;
        let written = self.codec.decode(&bytes)?;
        self.collection.replace_root(written);

        info!(
            name = %name,
            entries = merged.len(),
            reset,
            locked = self.collection.is_locked(),
            "Synced collection to storage"
        );
        Ok(())
    }

    fn ensure_flat(&self) -> Result<()> {
        match self.collection.strategy() {
            Strategy::Flat => Ok(()),
            strategy => Err(PersistError::UnsupportedStrategy { strategy }.into()),
        }
    }

    fn load_stored(&self, name: &str) -> Result<Map> {
        let bytes = self.storage.read(name)?;
        match self.codec.decode(&bytes) {
            Ok(map) => Ok(map),
            Err(e) if e.is_codec_error() => {
                warn!(
                    name = %name,
                    error = %e,
                    "Stored content is not a mapping, treating as empty"
                );
                Ok(Map::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the attached storage object name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_attached(&self) -> bool {
        self.name.is_some()
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    /// Consumes the wrapper, returning the in-memory collection
    pub fn into_collection(self) -> Collection {
        self.collection
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Gives direct access to the storage, bypassing the collection
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

impl<S, C> Deref for PersistentCollection<S, C> {
    type Target = Collection;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}

impl<S, C> DerefMut for PersistentCollection<S, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.collection
    }
}
