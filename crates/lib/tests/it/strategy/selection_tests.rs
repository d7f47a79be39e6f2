//! Choosing a strategy by name

use dotcollection::{Collection, CollectionError, Error, Strategy};

#[test]
fn test_parse_strategy_names() {
    assert_eq!("hierarchical".parse::<Strategy>(), Ok(Strategy::Hierarchical));
    assert_eq!(" Flat ".parse::<Strategy>(), Ok(Strategy::Flat));
    assert_eq!(Strategy::Flat.to_string(), "flat");
}

#[test]
fn test_unknown_strategy_is_configuration_error() {
    let err = "nested".parse::<Strategy>().unwrap_err();
    assert_eq!(
        err,
        CollectionError::UnknownStrategy {
            name: "nested".to_string()
        }
    );

    let err: Error = err.into();
    assert!(err.is_configuration_error());
    assert_eq!(err.module(), "collection");
}

#[test]
fn test_strategy_serde_names() {
    assert_eq!(serde_json::to_string(&Strategy::Hierarchical).unwrap(), r#""hierarchical""#);
    let parsed: Strategy = serde_json::from_str(r#""flat""#).unwrap();
    assert_eq!(parsed, Strategy::Flat);

    let c = Collection::with_strategy(parsed);
    assert_eq!(c.strategy(), Strategy::Flat);
}
