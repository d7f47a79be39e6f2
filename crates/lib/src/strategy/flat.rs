use super::Addressing;
use crate::tree::{Map, Value};

/// Single-level addressing: a key, dots included, names one top-level entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flat;

impl Addressing for Flat {
    fn has(&self, root: &Map, key: &str) -> bool {
        root.contains_key(key)
    }

    fn get<'a>(&self, root: &'a Map, key: &str) -> Option<&'a Value> {
        root.get(key)
    }

    fn set(&self, root: &mut Map, key: &str, value: Value) -> bool {
        root.insert(key, value);
        true
    }

    fn remove(&self, root: &mut Map, key: &str) -> bool {
        root.remove(key).is_some()
    }
}
