//! Read-only commands: get, has, keys, count, dump.

use dotcollection::{Collection, CollectionError, Map};

use crate::cli::{KeyArgs, ScopeArgs, StoreArgs};
use crate::output::{OutputFormat, human_value, print_table, truncate};
use crate::store;

const VALUE_COLUMN_WIDTH: usize = 60;

fn load(args: &StoreArgs) -> Result<Collection, Box<dyn std::error::Error>> {
    let collection = store::open(args)?;
    Ok(store::view(&collection, args.strategy))
}

/// The map a scoped command works on: the top level, or the object at `key`
fn scope<'a>(
    view: &'a Collection,
    key: Option<&str>,
) -> Result<&'a Map, Box<dyn std::error::Error>> {
    let Some(key) = key else {
        return Ok(view.as_map());
    };
    let value = view.get(key).ok_or_else(|| CollectionError::KeyNotFound {
        key: key.to_string(),
    })?;
    value
        .as_map()
        .ok_or_else(|| format!("'{key}' holds a {}, not an object", value.type_name()).into())
}

/// Run the `get` command
pub fn get(
    store_args: &StoreArgs,
    args: &KeyArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = load(store_args)?;
    let value = view.get(&args.key).ok_or_else(|| CollectionError::KeyNotFound {
        key: args.key.clone(),
    })?;

    match format {
        OutputFormat::Human => println!("{}", human_value(value)),
        OutputFormat::Json => println!("{}", value.to_json_string()),
    }
    Ok(())
}

/// Run the `has` command
pub fn has(
    store_args: &StoreArgs,
    args: &KeyArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = load(store_args)?;
    let present = view.has(&args.key);

    match format {
        OutputFormat::Human => println!("{present}"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "key": args.key, "present": present });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the `keys` command
pub fn keys(
    store_args: &StoreArgs,
    args: &ScopeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = load(store_args)?;
    let keys: Vec<&str> = scope(&view, args.key.as_deref())?.keys().collect();

    match format {
        OutputFormat::Human => {
            for key in keys {
                println!("{key}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&keys)?),
    }
    Ok(())
}

/// Run the `count` command
pub fn count(
    store_args: &StoreArgs,
    args: &ScopeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = load(store_args)?;
    let count = scope(&view, args.key.as_deref())?.len();

    match format {
        OutputFormat::Human => println!("{count}"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "key": args.key, "count": count });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

/// Run the `dump` command
pub fn dump(
    store_args: &StoreArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = load(store_args)?;

    match format {
        OutputFormat::Human => {
            if view.is_empty() {
                println!("Collection is empty.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = view
                .iter()
                .map(|(key, value)| {
                    vec![
                        key.to_string(),
                        value.type_name().to_string(),
                        truncate(&human_value(value), VALUE_COLUMN_WIDTH),
                    ]
                })
                .collect();
            print_table(&["KEY", "TYPE", "VALUE"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&view)?),
    }
    Ok(())
}
