//! The structured form of a resolved path.
//!
//! A [`ParsedPath`] is what [`resolve`](super::algebra::resolve) accumulates
//! into: a root marker, the directory segments, and a pending leaf.

use std::fmt;
use std::path::MAIN_SEPARATOR_STR;

use super::algebra::{is_absolute, split};

/// A path broken into its root marker, directory segments and leaf.
///
/// Segments never contain empty or `.` entries; a `..` entry can only appear
/// at the front of a relative path, where it records an upward reference
/// that could not be cancelled. The leaf is the last segment of the most
/// recently pushed fragment and is kept apart so that the next fragment can
/// decide whether it becomes a directory segment.
///
/// # Examples
///
/// ```
/// use pathway::path::ParsedPath;
///
/// # #[cfg(unix)] {
/// let mut path = ParsedPath::parse("/usr");
/// path.push("local");
/// path.push("../lib");
/// assert_eq!(path.to_string(), "/usr/lib");
/// assert!(path.is_absolute());
/// assert_eq!(path.leaf(), Some("lib"));
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    root: String,
    segments: Vec<String>,
    leaf: Option<String>,
}

impl ParsedPath {
    /// Create an empty relative path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single path string.
    ///
    /// This is one-fragment resolution, so `ParsedPath::parse(p).to_string()`
    /// is the normal form of `p`.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let mut parsed = Self::new();
        parsed.push(path);
        parsed
    }

    /// Resolve another fragment on top of this path.
    ///
    /// Blank fragments are ignored. An absolute fragment discards everything
    /// accumulated so far. Otherwise the pending leaf becomes a directory
    /// segment and the fragment's own segments are applied in order.
    pub fn push(&mut self, path: &str) {
        if path.trim().is_empty() {
            return;
        }

        let mut parts = split(path);
        if is_absolute(path) {
            let marker = if parts.is_empty() { "" } else { parts.remove(0) };
            self.root = format!("{marker}{MAIN_SEPARATOR_STR}");
            self.segments.clear();
            self.leaf = None;
        } else if let Some(leaf) = self.leaf.take() {
            if !leaf.is_empty() {
                self.segments.push(leaf);
            }
        }

        // A trailing separator or `.` leaves an empty leaf, rendered as a
        // trailing separator. A trailing `..` leaves none.
        match parts.pop() {
            Some("..") => parts.push(".."),
            Some(".") => {
                parts.push(".");
                self.leaf = Some(String::new());
            }
            Some(last) => self.leaf = Some(last.to_string()),
            None => {}
        }

        for part in parts {
            self.push_segment(part);
        }
    }

    fn push_segment(&mut self, part: &str) {
        match part {
            ".." => {
                if self.segments.last().is_some_and(|last| last != "..") {
                    self.segments.pop();
                } else if self.root.is_empty() {
                    // a relative path keeps references it cannot cancel
                    self.segments.push(part.to_string());
                }
            }
            "" | "." => {}
            _ => self.segments.push(part.to_string()),
        }
    }

    /// The root marker, including its trailing separator, if the path is
    /// absolute.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        if self.root.is_empty() {
            None
        } else {
            Some(&self.root)
        }
    }

    /// Whether the path carries a root marker.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !self.root.is_empty()
    }

    /// The directory segments, excluding the leaf.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final component, if any.
    ///
    /// `Some("")` marks a path that ended in a separator or in `.`.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.leaf.as_deref()
    }

    /// All named components after the root: the segments followed by a
    /// non-empty leaf.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .map(String::as_str)
            .chain(self.leaf.as_deref().filter(|leaf| !leaf.is_empty()))
    }

    /// Whether the path has no root and no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.components().next().is_none()
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.segments.join(MAIN_SEPARATOR_STR);
        f.write_str(&self.root)?;
        f.write_str(&joined)?;
        if let Some(leaf) = &self.leaf {
            if !joined.is_empty() {
                f.write_str(MAIN_SEPARATOR_STR)?;
            }
            f.write_str(leaf)?;
        }
        Ok(())
    }
}

impl From<&str> for ParsedPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}
