//! Named blob storage for persisted collections.

use std::{
    collections::HashMap,
    fs, io,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use super::PersistError;
use crate::{Error, Result};

/// A store of named byte blobs.
///
/// A storage object is identified by a name and holds the encoded snapshot of
/// one collection. Names are opaque to the collection; each storage decides
/// which names it accepts.
pub trait Storage {
    /// Returns `true` if an object with this name exists.
    fn exists(&self, name: &str) -> Result<bool>;

    /// Reads the whole object.
    ///
    /// Returns [`PersistError::StorageUnavailable`] if the object does not exist.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Replaces the object, creating it if needed.
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Storage backed by files under a root directory.
///
/// Object names are relative paths below the root. Absolute names and names
/// that climb out of the root with `..` are rejected.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves an object name to a file path below the root.
    pub fn path_of(&self, name: &str) -> Result<PathBuf> {
        let invalid = |reason: &str| -> Error {
            PersistError::InvalidName {
                name: name.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        for component in Path::new(name).components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => return Err(invalid("name leaves the storage root")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("name must be relative"));
                }
            }
        }
        Ok(self.root.join(name))
    }
}

fn io_error(name: &str, source: io::Error) -> Error {
    PersistError::Io {
        name: name.to_string(),
        source,
    }
    .into()
}

impl Storage for FileStorage {
    fn exists(&self, name: &str) -> Result<bool> {
        let path = self.path_of(name)?;
        match fs::metadata(&path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(name, e)),
        }
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path_of(name)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(PersistError::StorageUnavailable {
                    name: name.to_string(),
                }
                .into())
            }
            Err(e) => Err(io_error(name, e)),
        }
    }

    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_of(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(name, e))?;
        }
        fs::write(&path, bytes).map_err(|e| io_error(name, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Wrote storage object");
        Ok(())
    }
}

/// Storage that keeps objects in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    objects: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to pre-populate an object
    pub fn with_object(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.objects.insert(name.into(), bytes.into());
        self
    }

    /// Returns the raw bytes of an object, if present
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.objects.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.objects.contains_key(name))
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.objects.get(name).cloned().ok_or_else(|| {
            PersistError::StorageUnavailable {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.objects.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn exists(&self, name: &str) -> Result<bool> {
        (**self).exists(name)
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read(name)
    }

    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        (**self).write(name, bytes)
    }
}
