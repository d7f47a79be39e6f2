//! Dotted path keys for hierarchical collection access.
//!
//! A key such as `"app.version"` is split on the literal `.` character into an
//! ordered list of segments (`["app", "version"]`). Splitting is strict: there is no
//! escaping and no normalization, so empty segments are kept as literal keys.
//!
//! # Usage
//!
//! ```rust
//! use dotcollection::path::PathKey;
//!
//! let key = PathKey::parse("app.version");
//! assert_eq!(key.segments(), &["app", "version"]);
//!
//! // The empty key is a single empty segment, never zero segments
//! assert_eq!(PathKey::parse("").segments(), &[""]);
//! ```

use std::fmt;

use crate::constants::SEPARATOR;

/// A dotted key split into its ordered segments.
///
/// `PathKey` borrows from the key string it was parsed from. It always holds at
/// least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathKey<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathKey<'a> {
    /// Splits `key` on every `.`.
    ///
    /// ```rust
    /// # use dotcollection::path::PathKey;
    /// assert_eq!(PathKey::parse("a.b.c").segments(), &["a", "b", "c"]);
    /// assert_eq!(PathKey::parse("a").segments(), &["a"]);
    /// assert_eq!(PathKey::parse("a..b").segments(), &["a", "", "b"]);
    /// ```
    pub fn parse(key: &'a str) -> Self {
        Self {
            segments: key.split(SEPARATOR).collect(),
        }
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns an iterator over the segments.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().copied()
    }

    /// Returns the number of segments. Always at least 1.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A parsed key always has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if the key spans more than one level.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Returns the parent segments and the terminal segment.
    pub fn split_last(&self) -> (&[&'a str], &'a str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last),
            // parse() never yields zero segments
            None => (&[], ""),
        }
    }

    /// Returns the terminal segment.
    pub fn last(&self) -> &'a str {
        self.split_last().1
    }
}

impl<'a> From<&'a str> for PathKey<'a> {
    fn from(key: &'a str) -> Self {
        PathKey::parse(key)
    }
}

impl fmt::Display for PathKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Splits a dotted key into owned segments.
///
/// Convenience wrapper over [`PathKey::parse`] for callers that need to keep the
/// segments beyond the lifetime of the key.
pub fn split(key: &str) -> Vec<String> {
    PathKey::parse(key).iter().map(str::to_string).collect()
}

/// Joins segments into a dotted key.
///
/// ```rust
/// # use dotcollection::path::join;
/// assert_eq!(join(["app", "version"]), "app.version");
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut key = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        key.push_str(segment.as_ref());
    }
    key
}

/// Builds a dotted key from components.
///
/// Each argument is converted with `to_string()`, so runtime values and literals
/// can be mixed.
///
/// ```rust
/// # use dotcollection::path;
/// let section = "app";
/// assert_eq!(path!(section, "version"), "app.version");
/// assert_eq!(path!("users", 42, "name"), "users.42.name");
/// ```
#[macro_export]
macro_rules! path {
    ($($component:expr),+ $(,)?) => {
        $crate::path::join([$($component.to_string()),+])
    };
}
