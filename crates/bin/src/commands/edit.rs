//! Commands that change the collection file: init, set, remove.

use dotcollection::{CollectionError, Value};

use crate::cli::{InitArgs, KeyArgs, SetArgs, StoreArgs};
use crate::output::{OutputFormat, human_value};
use crate::store;

/// Run the `init` command
pub fn init(
    store_args: &StoreArgs,
    args: &InitArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let (collection, created) = store::init(store_args, args.force)?;
    let path = store::display_path(store_args);

    match format {
        OutputFormat::Human => {
            if created {
                println!("Created {path}");
            } else if args.force {
                println!("Emptied {path}");
            } else {
                println!("{path} already exists ({} entries)", collection.count());
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file": path,
                "created": created,
                "entries": collection.count(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

fn parse_value(args: &SetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.json {
        let parsed: serde_json::Value = serde_json::from_str(&args.value)
            .map_err(|e| format!("--json value is not valid JSON: {e}"))?;
        Ok(parsed.into())
    } else {
        Ok(Value::from(args.value.as_str()))
    }
}

/// Run the `set` command
pub fn set(
    store_args: &StoreArgs,
    args: &SetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(args)?;
    let mut collection = store::open(store_args)?;
    let mut view = store::view(&collection, store_args.strategy);

    if !view.set(&args.key, value.clone()) {
        return Err(format!(
            "Cannot set '{}': a parent key holds a value that is not an object",
            args.key
        )
        .into());
    }
    store::commit(&mut collection, view)?;
    tracing::debug!(key = %args.key, "Stored value");

    match format {
        OutputFormat::Human => println!("{} = {}", args.key, human_value(&value)),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "key": args.key,
                "value": serde_json::Value::from(value),
            });
            println!("{}", serde_json::to_string(&json)?);
        }
    }
    Ok(())
}

/// Run the `remove` command
pub fn remove(
    store_args: &StoreArgs,
    args: &KeyArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut collection = store::open(store_args)?;
    let mut view = store::view(&collection, store_args.strategy);

    if !view.remove(&args.key) {
        return Err(CollectionError::KeyNotFound {
            key: args.key.clone(),
        }
        .into());
    }
    store::commit(&mut collection, view)?;

    match format {
        OutputFormat::Human => println!("Removed {}", args.key),
        OutputFormat::Json => {
            let json = serde_json::json!({ "key": args.key, "removed": true });
            println!("{}", serde_json::to_string(&json)?);
        }
    }
    Ok(())
}
