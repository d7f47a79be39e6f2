use tracing::debug;

use super::Addressing;
use crate::{
    path::PathKey,
    tree::{Map, Value},
};

/// Dotted-path addressing over nested maps.
///
/// `"app.version"` resolves to the `version` entry of the map stored under `app`.
/// Writes create missing intermediate maps but never descend through a leaf:
/// setting `"a.b"` while `a` holds a scalar (or `Null`) fails and leaves the tree
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hierarchical;

impl Hierarchical {
    /// Walks `segments` from `root`, returning the map they lead to.
    fn descend<'a>(root: &'a Map, segments: &[&str]) -> Option<&'a Map> {
        let mut current = root;
        for segment in segments {
            current = current.get(segment)?.as_map()?;
        }
        Some(current)
    }

    /// Returns the first segment of `parents` that exists but is not a map.
    fn find_conflict<'k>(root: &Map, parents: &[&'k str]) -> Option<&'k str> {
        let mut current = root;
        for segment in parents {
            match current.get(segment) {
                Some(Value::Map(child)) => current = child,
                Some(_) => return Some(*segment),
                // Everything below here will be created fresh
                None => return None,
            }
        }
        None
    }
}

impl Addressing for Hierarchical {
    fn get<'a>(&self, root: &'a Map, key: &str) -> Option<&'a Value> {
        let path = PathKey::parse(key);
        let (parents, last) = path.split_last();
        Self::descend(root, parents)?.get(last)
    }

    fn set(&self, root: &mut Map, key: &str, value: Value) -> bool {
        let path = PathKey::parse(key);
        let (parents, last) = path.split_last();

        // Checked up front so a rejected write creates no intermediate maps
        if let Some(segment) = Self::find_conflict(root, parents) {
            debug!(key = %key, segment = %segment, "Refusing to write through a leaf value");
            return false;
        }

        let mut target = root;
        for segment in parents {
            match target.branch_mut(segment) {
                Some(child) => target = child,
                None => return false,
            }
        }
        target.insert(last, value);
        true
    }

    fn remove(&self, root: &mut Map, key: &str) -> bool {
        let path = PathKey::parse(key);
        let (parents, last) = path.split_last();

        let mut target = root;
        for segment in parents {
            match target.get_mut(segment) {
                Some(Value::Map(child)) => target = child,
                _ => return false,
            }
        }
        target.remove(last).is_some()
    }
}
