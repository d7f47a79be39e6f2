//! End-to-end usage scenarios

use dotcollection::{Collection, Map, Strategy, Value};

use crate::helpers::*;

#[test]
fn test_update_nested_version() {
    let mut c = sample_collection();
    assert_text(&c, "app.version", "1.1");

    assert!(c.set("app.version", "1.2"));
    assert_text(&c, "app.version", "1.2");
    assert_eq!(
        c.get("app"),
        Some(&Value::Map(
            Map::new().with("name", "My App").with("version", "1.2")
        ))
    );
}

#[test]
fn test_flat_dotted_key_is_literal() {
    let mut c = Collection::from_entries(Map::new(), Strategy::Flat);
    assert!(c.set("hello.world", "x"));

    assert!(c.has("hello.world"));
    assert!(!c.has("hello"));
    assert!(c.get("hello").is_none());
}

#[test]
fn test_filter_then_reduce_over_numeric_keys() {
    let c = Collection::from_iter([
        ("1", Value::from(1)),
        ("2", Value::from("two")),
        ("3", Value::from(3)),
    ]);

    let total = c
        .filter(|value, _| value.as_int().is_some())
        .reduce(
            |carry, value, key| {
                let key: i64 = key.parse().unwrap_or(0);
                carry + value.as_int().unwrap_or(0) - key
            },
            0,
        );
    assert_eq!(total, 0);
}

#[test]
fn test_configuration_workflow() {
    let mut c = Collection::new();
    c.set("hello", "world!");
    c.set("app.name", "My App");
    c.set("app.version", "1.1");
    c.set("app.features.beta", false);

    assert!(c.has("app.features.beta"));
    assert_eq!(c.get_as::<bool>("app.features.beta"), Some(false));

    c.lock();
    assert!(!c.set("app.version", "1.2"));
    assert_text(&c, "app.version", "1.1");
}
