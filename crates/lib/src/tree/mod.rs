//! The data model behind a collection.
//!
//! A collection tree is a [`Map`] root whose values are [`Value`] nodes. A
//! [`Value::Map`] is a branch that dotted paths can descend into; every other
//! variant, `Null` and lists included, is a leaf.

pub mod map;
pub mod value;

pub use map::Map;
pub use value::Value;
