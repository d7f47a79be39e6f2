//! Addressing strategies.
//!
//! A strategy decides how a key string maps to a location in a collection tree:
//!
//! - [`Hierarchical`] splits the key on `.` and walks nested maps, creating
//!   intermediate maps on write.
//! - [`Flat`] treats the whole key as one literal top-level name.
//!
//! Both implement [`Addressing`]. [`Strategy`] is the tagged selector a
//! [`Collection`](crate::Collection) is configured with.

use std::{fmt, str::FromStr};

use crate::{
    collection::CollectionError,
    tree::{Map, Value},
};

mod flat;
mod hierarchical;

pub use flat::Flat;
pub use hierarchical::Hierarchical;

/// Key resolution against a root [`Map`].
///
/// Implementations never panic and never return errors: outcomes are reported
/// through `bool` and `Option` so call sites can use them inline.
pub trait Addressing {
    /// Returns `true` if `key` resolves to a stored value, including a stored `Null`.
    fn has(&self, root: &Map, key: &str) -> bool {
        self.get(root, key).is_some()
    }

    /// Returns the value stored at `key`, or `None` if it is absent.
    fn get<'a>(&self, root: &'a Map, key: &str) -> Option<&'a Value>;

    /// Stores `value` at `key`. Returns `false` with no mutation if the key cannot
    /// be addressed.
    fn set(&self, root: &mut Map, key: &str, value: Value) -> bool;

    /// Removes the value at `key`. Returns `false` if it was absent.
    fn remove(&self, root: &mut Map, key: &str) -> bool;
}

/// The addressing policy of a collection.
///
/// ```
/// # use dotcollection::Strategy;
/// let strategy: Strategy = "flat".parse().unwrap();
/// assert_eq!(strategy, Strategy::Flat);
/// assert_eq!(Strategy::default(), Strategy::Hierarchical);
/// assert!("nested".parse::<Strategy>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Dotted keys address nested maps
    #[default]
    Hierarchical,
    /// Keys are literal top-level names
    Flat,
}

impl Strategy {
    /// Returns the configuration name of this strategy
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Hierarchical => "hierarchical",
            Strategy::Flat => "flat",
        }
    }

    fn addressing(&self) -> &'static dyn Addressing {
        match self {
            Strategy::Hierarchical => &Hierarchical,
            Strategy::Flat => &Flat,
        }
    }
}

impl Addressing for Strategy {
    fn has(&self, root: &Map, key: &str) -> bool {
        self.addressing().has(root, key)
    }

    fn get<'a>(&self, root: &'a Map, key: &str) -> Option<&'a Value> {
        self.addressing().get(root, key)
    }

    fn set(&self, root: &mut Map, key: &str, value: Value) -> bool {
        self.addressing().set(root, key, value)
    }

    fn remove(&self, root: &mut Map, key: &str) -> bool {
        self.addressing().remove(root, key)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = CollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hierarchical" | "dotted" => Ok(Strategy::Hierarchical),
            "flat" | "simple" => Ok(Strategy::Flat),
            _ => Err(CollectionError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
