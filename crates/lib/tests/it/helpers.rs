use dotcollection::{Collection, Map, Strategy, Value};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// The sample document used across the collection tests:
/// `{hello: "world!", app: {name: "My App", version: "1.1"}}`
pub fn sample_map() -> Map {
    Map::new().with("hello", "world!").with(
        "app",
        Map::new().with("name", "My App").with("version", "1.1"),
    )
}

/// A hierarchical collection holding [`sample_map`]
pub fn sample_collection() -> Collection {
    Collection::from(sample_map())
}

/// An empty collection with flat addressing
pub fn flat_collection() -> Collection {
    Collection::with_strategy(Strategy::Flat)
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Asserts the top-level keys of a collection, in order
pub fn assert_keys(collection: &Collection, expected: &[&str]) {
    let keys: Vec<&str> = collection.keys().collect();
    assert_eq!(keys, expected, "top-level keys differ");
}

/// Asserts that `key` holds a text value equal to `expected`
#[track_caller]
pub fn assert_text(collection: &Collection, key: &str, expected: &str) {
    assert_eq!(
        collection.get(key).and_then(Value::as_text),
        Some(expected),
        "unexpected value at {key}"
    );
}
