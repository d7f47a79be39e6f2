//! Codecs between a collection snapshot and stored bytes.

use super::PersistError;
use crate::{
    Result,
    tree::{Map, Value},
};

/// Converts a root [`Map`] to bytes and back.
pub trait Codec {
    /// Encodes a snapshot.
    fn encode(&self, map: &Map) -> Result<Vec<u8>>;

    /// Decodes stored bytes into a snapshot.
    ///
    /// Content that is well-formed but not a mapping is a
    /// [`PersistError::NotAMap`] error.
    fn decode(&self, bytes: &[u8]) -> Result<Map>;
}

/// JSON codec backed by `serde_json`.
///
/// Object key order is preserved. An empty JSON array decodes to an empty map,
/// since it is how an empty collection looks to JSON writers without a
/// distinct object type.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes indented JSON instead of compact JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Codec for JsonCodec {
    fn encode(&self, map: &Map) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(map)
        } else {
            serde_json::to_vec(map)
        };
        Ok(bytes.map_err(|source| PersistError::SerializationFailed { source })?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Map> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|source| PersistError::DeserializationFailed { source })?;
        match value {
            Value::Map(map) => Ok(map),
            Value::List(items) if items.is_empty() => Ok(Map::new()),
            other => Err(PersistError::NotAMap {
                found: other.type_name(),
            }
            .into()),
        }
    }
}
