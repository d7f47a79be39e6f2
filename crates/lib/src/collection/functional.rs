//! Functional transforms over the top-level entries of a collection.
//!
//! `filter` and `map` return new, unlocked collections with the source's strategy.
//! Entries are copied as-is, so a top-level key keeps its exact name whatever the
//! strategy. The source collection is never modified.

use super::Collection;
use crate::tree::{Map, Value};

impl Collection {
    /// Returns a collection holding the top-level entries for which `predicate`
    /// returns `true`, in their original order.
    ///
    /// ```
    /// # use dotcollection::{Collection, Value};
    /// let c = Collection::from_iter([("a", Value::from(1)), ("b", Value::from("two"))]);
    /// let ints = c.filter(|value, _key| value.as_int().is_some());
    /// assert_eq!(ints.keys().collect::<Vec<_>>(), vec!["a"]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value, &str) -> bool,
    {
        let root: Map = self
            .iter()
            .filter(|&(key, value)| predicate(value, key))
            .map(|(key, value)| (key, value.clone()))
            .collect();
        self.derive(root)
    }

    /// Returns a collection with every top-level value replaced by `transform(value)`.
    pub fn map<F, V>(&self, mut transform: F) -> Collection
    where
        F: FnMut(&Value) -> V,
        V: Into<Value>,
    {
        self.map_with_key(|_, value| transform(value))
    }

    /// Like [`Collection::map`], but the transform also receives the key.
    pub fn map_with_key<F, V>(&self, mut transform: F) -> Collection
    where
        F: FnMut(&str, &Value) -> V,
        V: Into<Value>,
    {
        let root: Map = self
            .iter()
            .map(|(key, value)| (key, transform(key, value)))
            .collect();
        self.derive(root)
    }

    /// Folds the top-level entries, in insertion order, into a single result.
    ///
    /// Every entry is visited exactly once; there is no short-circuit.
    ///
    /// ```
    /// # use dotcollection::{Collection, Value};
    /// let c = Collection::from_iter([("a", 1), ("b", 2), ("c", 3)]);
    /// let sum = c.reduce(|acc, value, _key| acc + value.as_int().unwrap_or(0), 0);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn reduce<A, F>(&self, mut combine: F, init: A) -> A
    where
        F: FnMut(A, &Value, &str) -> A,
    {
        self.iter()
            .fold(init, |acc, (key, value)| combine(acc, value, key))
    }
}
