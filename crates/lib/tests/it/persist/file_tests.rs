//! attach/sync against files in a temporary directory

use dotcollection::{FileStorage, PersistentCollection, Value};

use super::helpers::*;

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    {
        let mut writer =
            PersistentCollection::open(FileStorage::new(dir.path()), "config.json", true)
                .expect("Failed to attach writer");
        writer.set("hello", "world!");
        writer.set("app.version", "1.1");
        writer.sync(false).expect("Failed to sync writer");
    }

    let reader = PersistentCollection::open(FileStorage::new(dir.path()), "config.json", false)
        .expect("Failed to attach reader");
    assert_eq!(reader.get("app.version"), Some(&Value::from("1.1")));
    assert_eq!(reader.keys().collect::<Vec<_>>(), vec!["hello", "app.version"]);

    let on_disk = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert_eq!(on_disk, r#"{"hello":"world!","app.version":"1.1"}"#);
}

#[test]
fn test_two_writers_merge_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut first =
        PersistentCollection::open(FileStorage::new(dir.path()), "shared.json", true).unwrap();
    let mut second =
        PersistentCollection::open(FileStorage::new(dir.path()), "shared.json", false).unwrap();

    first.set("from_first", 1);
    first.sync(false).unwrap();

    second.set("from_second", 2);
    second.sync(false).unwrap();

    assert_eq!(second.count(), 2);
    assert_eq!(
        stored_text(second.storage(), "shared.json"),
        r#"{"from_first":1,"from_second":2}"#
    );
}

#[test]
fn test_missing_file_without_reset() {
    let dir = tempfile::tempdir().unwrap();
    let err = PersistentCollection::open(FileStorage::new(dir.path()), "absent.json", false)
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(!dir.path().join("absent.json").exists());
}

#[test]
fn test_nested_object_names_create_directories() {
    let dir = tempfile::tempdir().unwrap();
    let persistent =
        PersistentCollection::open(FileStorage::new(dir.path()), "env/prod/app.json", true)
            .unwrap();
    assert!(persistent.is_attached());
    assert!(dir.path().join("env/prod/app.json").is_file());
}

#[test]
fn test_escaping_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = PersistentCollection::open(FileStorage::new(dir.path()), "../escape.json", true)
        .unwrap_err();
    assert!(err.is_configuration_error());
}
