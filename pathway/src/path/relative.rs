//! Relative path computation.
//!
//! This module answers "how do I get from one directory to another" for two
//! paths in normal form, by comparing their components.

use std::path::MAIN_SEPARATOR_STR;

use super::types::ParsedPath;

/// Compute the path that leads from directory `from` to `to`.
///
/// Both paths are normalized first. The shared leading components are
/// dropped, every remaining component of `from` becomes a `..`, and the
/// remaining components of `to` follow. Equal paths give an empty string.
/// When the two paths have different roots there is no relative route and
/// `to` is returned in normal form.
///
/// Relative inputs are compared as written; callers that need the result
/// to be meaningful for paths climbing above their start should anchor
/// both sides with [`absolute`](super::absolute) first.
///
/// # Examples
///
/// ```
/// use pathway::path::relative;
///
/// # #[cfg(unix)] {
/// assert_eq!(relative("/srv/www", "/srv/logs/app.log"), "../logs/app.log");
/// assert_eq!(relative("/srv", "/srv/www"), "www");
/// assert_eq!(relative("/srv/www", "/srv"), "..");
/// assert_eq!(relative("/srv", "/srv"), "");
/// # }
/// ```
#[must_use]
pub fn relative(from: &str, to: &str) -> String {
    let from = ParsedPath::parse(from);
    let to = ParsedPath::parse(to);

    if from.root() != to.root() {
        return to.to_string();
    }

    let from_parts: Vec<&str> = from.components().collect();
    let to_parts: Vec<&str> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![".."; from_parts.len() - common];
    parts.extend_from_slice(&to_parts[common..]);
    parts.join(MAIN_SEPARATOR_STR)
}
