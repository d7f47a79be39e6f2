//! Hierarchical addressing through a collection

use dotcollection::{Addressing, Collection, Map, Value, strategy::Hierarchical};

#[test]
fn test_write_through_null_is_rejected() {
    let mut c = Collection::new();
    c.set("a", Value::Null);

    assert!(!c.set("a.b", 1));
    assert_eq!(c.get("a"), Some(&Value::Null));
}

#[test]
fn test_write_through_list_is_rejected() {
    let mut c = Collection::new();
    c.set("items", vec![1, 2]);

    assert!(!c.set("items.0", 5));
    assert!(c.get("items.0").is_none());
}

#[test]
fn test_deep_conflict_creates_nothing() {
    let mut c = Collection::new();
    c.set("a.b", 1);

    assert!(!c.set("a.b.c.d", 2));
    assert_eq!(c.get("a"), Some(&Value::Map(Map::new().with("b", 1))));
}

#[test]
fn test_empty_segments_are_literal_keys() {
    let mut c = Collection::new();
    assert!(c.set("a..b", 1));
    assert!(c.has("a."));
    assert!(!c.has("a.b"));
    assert_eq!(c.get_as::<i64>("a..b"), Some(1));

    assert!(c.set("", "root-level empty key"));
    assert!(c.has(""));
}

#[test]
fn test_strategy_works_on_bare_maps() {
    let mut root = Map::new();
    assert!(Hierarchical.set(&mut root, "x.y", Value::from(1)));
    assert!(Hierarchical.has(&root, "x"));
    assert!(Hierarchical.remove(&mut root, "x.y"));
    assert!(!Hierarchical.has(&root, "x.y"));
}
