//! filter, map and reduce over top-level entries

use dotcollection::{Collection, Strategy, Value};

use crate::helpers::*;

#[test]
fn test_filter_keeps_order_and_leaves_source() {
    let c = Collection::from_iter([
        ("a", Value::from(1)),
        ("b", Value::from("two")),
        ("c", Value::from(3)),
    ]);

    let ints = c.filter(|value, _| value.as_int().is_some());
    assert_keys(&ints, &["a", "c"]);
    assert_eq!(c.count(), 3);
}

#[test]
fn test_filter_sees_keys() {
    let c = sample_collection();
    let only_app = c.filter(|_, key| key == "app");
    assert_keys(&only_app, &["app"]);
    assert_text(&only_app, "app.name", "My App");
}

#[test]
fn test_map_transforms_values_in_place() {
    let c = Collection::from_iter([("a", 1), ("b", 2)]);
    let doubled = c.map(|value| value.as_int().unwrap_or(0) * 2);

    assert_keys(&doubled, &["a", "b"]);
    assert_eq!(doubled.get("b"), Some(&Value::Int(4)));
    assert_eq!(c.get("b"), Some(&Value::Int(2)));
}

#[test]
fn test_map_with_key() {
    let c = Collection::from_iter([("a", 1), ("b", 2)]);
    let labelled = c.map_with_key(|key, value| format!("{key}={value}"));
    assert_text(&labelled, "a", "a=1");
}

#[test]
fn test_reduce_visits_every_entry_in_order() {
    let c = Collection::from_iter([("x", 1), ("y", 2), ("z", 3)]);
    let order = c.reduce(
        |mut acc: Vec<String>, _, key| {
            acc.push(key.to_string());
            acc
        },
        Vec::new(),
    );
    assert_eq!(order, vec!["x", "y", "z"]);

    let empty = Collection::new();
    assert_eq!(empty.reduce(|acc, _, _| acc + 1, 41), 41);
}

#[test]
fn test_flat_keys_survive_filter() {
    let mut c = flat_collection();
    c.set("a.b", 1);
    c.set("c", 2);

    let filtered = c.filter(|_, key| key.contains('.'));
    assert_eq!(filtered.strategy(), Strategy::Flat);
    assert!(filtered.has("a.b"));
    assert_eq!(filtered.count(), 1);
}
