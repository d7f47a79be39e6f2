//! Core read and write behavior of a hierarchical collection

use dotcollection::{Collection, CollectionError, Map, Strategy, Value};

use crate::helpers::*;

// ===== READS =====

#[test]
fn test_has_is_idempotent() {
    let c = sample_collection();
    for key in ["hello", "app", "app.name", "missing", "app.missing", "hello.x", ""] {
        let first = c.has(key);
        for _ in 0..3 {
            assert_eq!(c.has(key), first, "has({key:?}) changed without mutation");
        }
    }
}

#[test]
fn test_get_nested_and_branch_values() {
    let c = sample_collection();
    assert_text(&c, "app.version", "1.1");
    assert_text(&c, "hello", "world!");

    let app = c.get("app").and_then(Value::as_map).unwrap();
    assert_eq!(app.len(), 2);
    assert!(c.get("hello.world").is_none());
    assert!(c.get("app.version.major").is_none());
}

#[test]
fn test_null_is_present_and_not_defaulted() {
    let mut c = Collection::new();
    assert!(c.set("x", Value::Null));

    assert!(c.has("x"));
    assert_eq!(c.get("x"), Some(&Value::Null));
    assert_eq!(c.get_or("x", "default"), Value::Null);
    assert_eq!(c.get_or("y", "default"), "default");
}

#[test]
fn test_falsy_values_are_present() {
    let mut c = Collection::new();
    c.set("zero", 0);
    c.set("empty", "");
    c.set("no", false);
    c.set("nothing", Map::new());
    c.set("none", Vec::<Value>::new());

    for key in ["zero", "empty", "no", "nothing", "none"] {
        assert!(c.has(key), "{key} should be present");
    }
}

#[test]
fn test_count_is_top_level_only() {
    let mut c = Collection::new();
    c.set("a", 1);
    c.set("b.c", 2);
    c.set("b.d", 3);

    assert_eq!(c.count(), 2);
    assert_keys(&c, &["a", "b"]);
}

#[test]
fn test_index_sugar() {
    let c = sample_collection();
    assert_eq!(c["app.name"], "My App");
    assert!(c["missing"].is_null());
}

// ===== TYPED READS =====

#[test]
fn test_get_as_conversions() {
    let mut c = Collection::new();
    c.set("port", 8080);
    c.set("ratio", 0.5);
    c.set("debug", true);
    c.set("name", "svc");

    assert_eq!(c.get_as::<i64>("port"), Some(8080));
    assert_eq!(c.get_as::<f64>("port"), Some(8080.0));
    assert_eq!(c.get_as::<f64>("ratio"), Some(0.5));
    assert_eq!(c.get_as::<bool>("debug"), Some(true));
    assert_eq!(c.get_as::<String>("name"), Some("svc".to_string()));
    assert_eq!(c.get_as::<i64>("name"), None);
    assert_eq!(c.get_as::<i64>("missing"), None);
}

#[test]
fn test_try_get_as_reports_failures() {
    let c = sample_collection();

    let err = c.try_get_as::<i64>("app.version").unwrap_err();
    assert!(err.is_type_error());

    let err = c.try_get_as::<&str>("app.build").unwrap_err();
    assert_eq!(
        err,
        CollectionError::KeyNotFound {
            key: "app.build".to_string()
        }
    );
    assert_eq!(err.key(), Some("app.build"));

    let app: &Map = c.try_get_as("app").unwrap();
    assert!(app.contains_key("name"));
}

// ===== WRITES =====

#[test]
fn test_set_get_round_trip() {
    let mut c = Collection::new();
    let cases: Vec<(&str, Value)> = vec![
        ("a", Value::from(1)),
        ("b.c", Value::from("text")),
        ("b.d.e", Value::from(vec![1, 2, 3])),
        ("f.g", Value::Null),
        ("h", Value::from(Map::new().with("i", 2.5))),
    ];

    for (key, value) in &cases {
        assert!(c.set(key, value.clone()), "set({key}) failed");
    }
    for (key, value) in &cases {
        assert_eq!(c.get(key), Some(value), "get({key}) mismatch");
    }
}

#[test]
fn test_set_through_scalar_fails_without_change() {
    let mut c = Collection::new();
    assert!(c.set("a", 5));
    assert!(!c.set("a.b", 1));
    assert_eq!(c.get("a"), Some(&Value::Int(5)));
    assert_eq!(c.count(), 1);
}

#[test]
fn test_overwrite_keeps_key_position() {
    let mut c = sample_collection();
    c.set("hello", "again");
    assert_keys(&c, &["hello", "app"]);

    // Replacing a branch with a scalar is a plain overwrite
    assert!(c.set("app", "flat now"));
    assert!(!c.has("app.name"));
}

#[test]
fn test_set_multiple_is_best_effort() {
    let mut c = Collection::new();
    c.set("a", 1);

    let ok = c.set_multiple([
        ("x", Value::from(1)),
        ("a.b", Value::from(2)),
        ("y.z", Value::from(3)),
    ]);
    assert!(!ok);
    assert!(c.has("x"));
    assert!(c.has("y.z"));
    assert_eq!(c.get("a"), Some(&Value::Int(1)));

    assert!(c.set_multiple([("p", 1), ("q", 2)]));
}

#[test]
fn test_remove_does_not_prune_parents() {
    let mut c = sample_collection();
    assert!(c.remove("app.version"));
    assert!(c.has("app.name"));
    assert!(c.has("app"));

    assert!(c.remove("app.name"));
    assert!(c.has("app"));
    assert_eq!(c.get("app"), Some(&Value::Map(Map::new())));

    assert!(!c.remove("app.name"));
    assert!(!c.remove("hello.world"));
}

#[test]
fn test_remove_keeps_sibling_order() {
    let mut c = Collection::from_iter([("a", 1), ("b", 2), ("c", 3)]);
    assert!(c.remove("b"));
    assert_keys(&c, &["a", "c"]);
}

#[test]
fn test_clear() {
    let mut c = sample_collection();
    assert!(c.clear());
    assert!(c.is_empty());
}

// ===== CONSTRUCTION AND EXPORT =====

#[test]
fn test_builder() {
    let c = Collection::builder()
        .entry("db.host", "localhost")
        .entries([("db.port", 5432), ("workers", 4)])
        .build();

    assert_eq!(c.strategy(), Strategy::Hierarchical);
    assert_eq!(c.get_as::<i64>("db.port"), Some(5432));
    assert_keys(&c, &["db", "workers"]);
    assert!(!c.is_locked());
}

#[test]
fn test_export_preserves_order() {
    let mut c = Collection::new();
    c.set("z", 1);
    c.set("a.b", Value::Null);
    c.set("m", vec!["x", "y"]);

    assert_eq!(c.to_json_string(), r#"{"z":1,"a":{"b":null},"m":["x","y"]}"#);
    assert_eq!(serde_json::to_string(&c).unwrap(), c.to_json_string());

    let exported = c.to_map();
    c.set("z", 2);
    assert_eq!(exported.get("z"), Some(&Value::Int(1)));
}

#[test]
fn test_iteration_in_insertion_order() {
    let c = sample_collection();
    let seen: Vec<&str> = c.iter().map(|(key, _)| key).collect();
    assert_eq!(seen, vec!["hello", "app"]);

    let mut count = 0;
    for (_key, _value) in &c {
        count += 1;
    }
    assert_eq!(count, c.count());
}

#[test]
fn test_with_root_keeps_dotted_top_level_keys() {
    let root = Map::new().with("a.b", 1).with("c", Map::new().with("d", 2));
    let c = Collection::with_root(root, Strategy::Hierarchical);

    assert_keys(&c, &["a.b", "c"]);
    assert!(c.has("c.d"));
    // Hierarchical reads split the key, so the literal dotted key is unreachable
    assert!(!c.has("a.b"));
}
