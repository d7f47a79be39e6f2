//! CLI argument definitions for the dotcollection binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotcollection::Strategy;

use crate::output::OutputFormat;

/// Read and edit JSON collections with dotted keys
#[derive(Parser, Debug)]
#[command(name = "dotcollection")]
#[command(about = "dotcollection: a simple collection, with dot notation")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the collection lives and how its keys are addressed
#[derive(clap::Args, Debug)]
pub struct StoreArgs {
    /// Directory holding collection files
    #[arg(
        short = 'D',
        long,
        default_value = ".",
        env = "DOTCOLLECTION_DATA_DIR",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Collection file name, relative to the data directory
    #[arg(
        short,
        long,
        default_value = "collection.json",
        env = "DOTCOLLECTION_FILE",
        global = true
    )]
    pub file: String,

    /// Key addressing: `hierarchical` walks nested objects, `flat` uses literal keys
    #[arg(short, long, default_value = "hierarchical", global = true)]
    pub strategy: Strategy,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the collection file if it does not exist
    Init(InitArgs),
    /// Print the value stored at a key
    Get(KeyArgs),
    /// Report whether a key is present (a stored null counts)
    Has(KeyArgs),
    /// Store a value at a key
    Set(SetArgs),
    /// Remove the value at a key
    Remove(KeyArgs),
    /// List the keys of the collection or of the object at a key
    Keys(ScopeArgs),
    /// Count the entries of the collection or of the object at a key
    Count(ScopeArgs),
    /// Print the whole collection
    Dump,
}

/// Arguments for the init command
#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Empty the file if it already exists
    #[arg(long)]
    pub force: bool,
}

/// A single key argument
#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    /// Dotted key, e.g. `app.version`
    pub key: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted key, e.g. `app.version`
    pub key: String,

    /// Value to store. Stored as text unless --json is given
    pub value: String,

    /// Parse the value as JSON (numbers, booleans, null, arrays, objects)
    #[arg(long)]
    pub json: bool,
}

/// An optional key scoping the command to a nested object
#[derive(clap::Args, Debug)]
pub struct ScopeArgs {
    /// Dotted key of a nested object; the top level if omitted
    pub key: Option<String>,
}
