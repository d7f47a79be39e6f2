//! The path-addressed collection.
//!
//! [`Collection`] owns a tree of [`Value`]s rooted at a [`Map`] and resolves keys
//! through its [`Strategy`]. It is the main entry point of the library.
//!
//! # Usage
//!
//! ```
//! use dotcollection::{Collection, Map, Value};
//!
//! let mut c = Collection::new();
//! c.set("hello", "world!");
//! c.set("app.name", "My App");
//! c.set("app.version", "1.1");
//!
//! assert_eq!(c.get_as::<&str>("app.version"), Some("1.1"));
//! assert_eq!(c.count(), 2);
//!
//! c.lock();
//! assert!(!c.set("app.version", "1.2"));
//! ```
//!
//! # Outcomes
//!
//! Data-path operations never fail loudly. `set`, `remove` and `set_multiple`
//! return `false` when the collection is locked or, for hierarchical keys, when the
//! path would have to descend through a leaf. Reads return `None` for absent keys
//! and are always permitted.

use std::{fmt, ops::Index};

use tracing::{debug, warn};

use crate::{
    strategy::{Addressing, Strategy},
    tree::{Map, Value},
};

mod builder;
mod errors;
mod functional;

pub use builder::CollectionBuilder;
pub use errors::CollectionError;

static NULL: Value = Value::Null;

/// An in-memory nested key-value container with dotted-path access.
///
/// Lock state is monotonic: once [`Collection::lock`] has been called, every
/// subsequent mutating call returns `false` and leaves the data unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    root: Map,
    strategy: Strategy,
    locked: bool,
}

impl Collection {
    /// Creates an empty collection with hierarchical addressing
    pub fn new() -> Self {
        Self::with_strategy(Strategy::Hierarchical)
    }

    /// Creates an empty collection with the given addressing strategy
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            root: Map::new(),
            strategy,
            locked: false,
        }
    }

    /// Creates a collection and applies `entries` through [`Collection::set_multiple`].
    ///
    /// Entries that cannot be applied (path conflicts) are skipped; see the
    /// `set_multiple` docs for the batch semantics.
    pub fn from_entries<I, K, V>(entries: I, strategy: Strategy) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut collection = Self::with_strategy(strategy);
        collection.set_multiple(entries);
        collection
    }

    /// Wraps an existing tree as-is.
    ///
    /// Unlike [`Collection::from_entries`], top-level keys are taken literally and
    /// never re-addressed, so a key such as `"a.b"` stays a single top-level key
    /// even under hierarchical addressing.
    pub fn with_root(root: Map, strategy: Strategy) -> Self {
        Self {
            root,
            strategy,
            locked: false,
        }
    }

    /// Creates a collection that is locked as soon as `entries` have been applied.
    pub fn read_only<I, K, V>(entries: I, strategy: Strategy) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut collection = Self::from_entries(entries, strategy);
        collection.lock();
        collection
    }

    /// Returns a builder for configuring a collection
    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    /// Returns the addressing strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Locks the collection against modification. Irreversible.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn writable(&self, key: &str) -> bool {
        if self.locked {
            debug!(key = %key, "Rejected write to locked collection");
        }
        !self.locked
    }

    /// Stores `value` at `key`.
    ///
    /// Returns `false` with no mutation if the collection is locked or the key
    /// cannot be addressed.
    pub fn set(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> bool {
        let key = key.as_ref();
        self.writable(key) && self.strategy.set(&mut self.root, key, value.into())
    }

    /// Applies `set` to every entry, in order.
    ///
    /// Every entry is attempted even after a failure; the result is `true` only if
    /// all of them succeeded. Nothing is rolled back. A locked collection rejects
    /// the whole batch.
    pub fn set_multiple<I, K, V>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        if !self.writable("*") {
            return false;
        }

        let mut total = 0usize;
        let mut failed = 0usize;
        for (key, value) in entries {
            total += 1;
            if !self.set(key, value) {
                failed += 1;
            }
        }

        if failed > 0 {
            warn!(failed, total, "Some entries could not be set");
        }
        failed == 0
    }

    /// Returns `true` if `key` is present, even when it holds `Null`
    pub fn has(&self, key: impl AsRef<str>) -> bool {
        self.strategy.has(&self.root, key.as_ref())
    }

    /// Gets the value stored at `key`.
    ///
    /// A stored null is returned as `Some(&Value::Null)`; `None` means absent.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.strategy.get(&self.root, key.as_ref())
    }

    /// Gets a copy of the value at `key`, or `default` when the key is absent.
    ///
    /// ```
    /// # use dotcollection::{Collection, Value};
    /// let mut c = Collection::new();
    /// c.set("x", Value::Null);
    /// assert_eq!(c.get_or("x", "default"), Value::Null);
    /// assert_eq!(c.get_or("y", "default"), "default");
    /// ```
    pub fn get_or(&self, key: impl AsRef<str>, default: impl Into<Value>) -> Value {
        match self.get(key) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Gets a value by key with automatic type conversion using `TryFrom`.
    ///
    /// Returns `None` if the key is absent or the conversion fails.
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = CollectionError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Like [`Collection::get_as`] but reports why the read failed.
    pub fn try_get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Result<T, CollectionError>
    where
        T: TryFrom<&'a Value, Error = CollectionError>,
    {
        let key = key.as_ref();
        let value = self.get(key).ok_or_else(|| CollectionError::KeyNotFound {
            key: key.to_string(),
        })?;
        T::try_from(value)
    }

    /// Removes the value at `key`.
    ///
    /// Returns `false` if the collection is locked or the key is absent. Parent
    /// maps are kept even when they become empty.
    pub fn remove(&mut self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        self.writable(key) && self.strategy.remove(&mut self.root, key)
    }

    /// Removes every top-level entry. Returns `false` if the collection is locked.
    pub fn clear(&mut self) -> bool {
        if !self.writable("*") {
            return false;
        }
        self.root.clear();
        true
    }

    /// Returns the top-level keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys()
    }

    /// Returns the number of top-level entries (not a recursive count)
    pub fn count(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns an iterator over the top-level entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root.iter()
    }

    /// Returns a read-only view of the root map
    pub fn as_map(&self) -> &Map {
        &self.root
    }

    /// Returns a deep copy of the root map
    pub fn to_map(&self) -> Map {
        self.root.clone()
    }

    /// Consumes the collection, returning its root map
    pub fn into_map(self) -> Map {
        self.root
    }

    /// Serializes the root map to a compact JSON string
    pub fn to_json_string(&self) -> String {
        Value::Map(self.root.clone()).to_json_string()
    }

    /// Replaces the whole tree, bypassing the lock. Used when reloading from storage.
    pub(crate) fn replace_root(&mut self, root: Map) {
        self.root = root;
    }

    /// Builds a sibling collection with the same strategy, unlocked.
    pub(crate) fn derive(&self, root: Map) -> Self {
        Self::with_root(root, self.strategy)
    }
}

/// `collection["app.version"]` reads like [`Collection::get`], yielding
/// `Value::Null` for absent keys.
impl<K: AsRef<str>> Index<K> for Collection {
    type Output = Value;

    fn index(&self, key: K) -> &Self::Output {
        self.get(key).unwrap_or(&NULL)
    }
}

impl From<Map> for Collection {
    fn from(map: Map) -> Self {
        Collection::from_entries(map, Strategy::Hierarchical)
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Collection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Collection::from_entries(iter, Strategy::Hierarchical)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.root).into_iter()
    }
}

impl serde::Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.root, serializer)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
