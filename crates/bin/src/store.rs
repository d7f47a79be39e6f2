//! Opening the collection file named on the command line.

use dotcollection::{Collection, FileStorage, PersistentCollection, Storage, Strategy};

use crate::cli::StoreArgs;

/// A flat collection synced with a JSON file
pub type FileCollection = PersistentCollection<FileStorage>;

/// Path of the collection file, for messages
pub fn display_path(args: &StoreArgs) -> String {
    args.data_dir.join(&args.file).display().to_string()
}

/// Open an existing collection file.
///
/// Opening syncs with the file, so the in-memory state is what is on disk.
pub fn open(args: &StoreArgs) -> Result<FileCollection, Box<dyn std::error::Error>> {
    let storage = FileStorage::new(&args.data_dir);
    match PersistentCollection::open(storage, args.file.clone(), false) {
        Ok(collection) => Ok(collection),
        Err(e) if e.is_not_found() => Err(format!(
            "{} does not exist, run `dotcollection init` first",
            display_path(args)
        )
        .into()),
        Err(e) => Err(e.into()),
    }
}

/// Create the collection file if it is missing. `force` empties an existing file.
///
/// Returns the opened collection and whether the file was created.
pub fn init(
    args: &StoreArgs,
    force: bool,
) -> Result<(FileCollection, bool), Box<dyn std::error::Error>> {
    let storage = FileStorage::new(&args.data_dir);
    let existed = storage.exists(&args.file)?;
    let collection = PersistentCollection::open(storage, args.file.clone(), force || !existed)?;
    Ok((collection, !existed))
}

/// The stored tree addressed with the requested strategy.
///
/// Stored top-level keys are kept literally, whatever the strategy.
pub fn view(collection: &FileCollection, strategy: Strategy) -> Collection {
    Collection::with_root(collection.to_map(), strategy)
}

/// Replace the stored content with `view` and write it to the file.
///
/// Nothing is written if the collection refuses the new entries.
pub fn commit(
    collection: &mut FileCollection,
    view: Collection,
) -> Result<(), Box<dyn std::error::Error>> {
    if !collection.clear() || !collection.set_multiple(view.into_map()) {
        return Err(format!(
            "{} is locked, nothing was written",
            collection.name().unwrap_or("collection")
        )
        .into());
    }
    collection.sync(true)?;
    Ok(())
}
