//! Subcommand implementations.

mod edit;
mod read;

use crate::cli::{Cli, Commands};

/// Dispatch the parsed command line
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = &cli.store;
    let format = cli.format;

    match &cli.command {
        Commands::Init(args) => edit::init(store, args, format),
        Commands::Set(args) => edit::set(store, args, format),
        Commands::Remove(args) => edit::remove(store, args, format),
        Commands::Get(args) => read::get(store, args, format),
        Commands::Has(args) => read::has(store, args, format),
        Commands::Keys(args) => read::keys(store, args, format),
        Commands::Count(args) => read::count(store, args, format),
        Commands::Dump => read::dump(store, format),
    }
}
