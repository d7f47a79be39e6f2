//! Builder for configuring a [`Collection`].

use super::Collection;
use crate::{strategy::Strategy, tree::Value};

/// Configures the strategy, initial entries and lock state of a collection.
///
/// ```
/// # use dotcollection::{Collection, Strategy};
/// let c = Collection::builder()
///     .strategy(Strategy::Flat)
///     .entry("db.host", "localhost")
///     .read_only()
///     .build();
///
/// assert!(c.has("db.host"));
/// assert!(c.is_locked());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectionBuilder {
    strategy: Strategy,
    entries: Vec<(String, Value)>,
    read_only: bool,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the addressing strategy (hierarchical by default)
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Adds one initial entry
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Adds initial entries in order
    pub fn entries<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Locks the collection once the initial entries are applied
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn build(self) -> Collection {
        let mut collection = Collection::from_entries(self.entries, self.strategy);
        if self.read_only {
            collection.lock();
        }
        collection
    }
}
