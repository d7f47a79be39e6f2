//! Constants used throughout the dotcollection library.

/// Library name.
pub const NAME: &str = "dotcollection";

/// One-line description of the library.
pub const DESCRIPTION: &str = "A simple collection, with dot notation";

/// Library version, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between the segments of a hierarchical key.
pub const SEPARATOR: char = '.';

