//! Flat addressing through a collection

use dotcollection::{Map, Value};

use crate::helpers::*;

#[test]
fn test_dots_are_part_of_the_key() {
    let mut c = flat_collection();
    assert!(c.set("app.name", "My App"));
    assert!(c.set("app", "separate"));

    assert_keys(&c, &["app.name", "app"]);
    assert_text(&c, "app.name", "My App");
    assert_text(&c, "app", "separate");
}

#[test]
fn test_nested_values_are_not_addressable_by_path() {
    let mut c = flat_collection();
    c.set("app", Map::new().with("name", "My App"));

    assert!(c.has("app"));
    assert!(!c.has("app.name"));
    assert!(!c.remove("app.name"));
}

#[test]
fn test_flat_writes_never_conflict() {
    let mut c = flat_collection();
    c.set("a", 5);
    assert!(c.set("a.b", 1));
    assert_eq!(c.get("a"), Some(&Value::Int(5)));
    assert_eq!(c.count(), 2);
}
