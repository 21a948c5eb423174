//! Pure functions over path strings.
//!
//! Nothing in this module touches the filesystem. Splitting honours the
//! platform separator and, where that separator is not `/`, also accepts
//! `/`. Every function that produces a path produces it in normal form.

use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use super::types::ParsedPath;

/// Split a path into its segments.
///
/// An empty path has no segments. A leading separator yields a leading
/// empty segment, which is how the root marker of an absolute path shows up.
///
/// # Examples
///
/// ```
/// use pathway::path::split;
///
/// assert_eq!(split("a/b/c"), ["a", "b", "c"]);
/// assert!(split("").is_empty());
/// ```
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    if MAIN_SEPARATOR == '/' {
        path.split('/').collect()
    } else {
        path.split(|c| c == MAIN_SEPARATOR || c == '/').collect()
    }
}

/// Check whether a path starts with a root marker.
///
/// On Unix the marker is a leading `/`. On Windows it is either a leading
/// separator or a drive prefix such as `C:\`.
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    if cfg!(windows) {
        has_drive_prefix(path) || path.starts_with([MAIN_SEPARATOR, '/'])
    } else {
        path.starts_with('/')
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/')
}

/// Resolve path fragments from left to right into a single normal path.
///
/// Resolution is incremental: `resolve([a, b]) == resolve([resolve([a]), b])`.
/// An absolute fragment discards everything before it. `..` cancels one
/// preceding segment; on a relative path an uncancellable `..` is kept, on an
/// absolute path it is dropped because nothing lies above the root.
///
/// # Examples
///
/// ```
/// use pathway::path::resolve;
///
/// # #[cfg(unix)] {
/// assert_eq!(resolve(["/usr", "local", "../lib"]), "/usr/lib");
/// assert_eq!(resolve(["a/b", "c"]), "a/b/c");
/// assert_eq!(resolve(["a", "..", ".."]), "..");
/// assert_eq!(resolve(["/a", "..", ".."]), "/");
/// # }
/// ```
pub fn resolve<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedPath::new();
    for path in paths {
        parsed.push(path.as_ref());
    }
    parsed.to_string()
}

/// Normalize a single path.
///
/// Defined as one-fragment resolution, which makes it idempotent.
///
/// # Examples
///
/// ```
/// use pathway::path::normal;
///
/// # #[cfg(unix)] {
/// assert_eq!(normal("/a/./b/../c"), "/a/c");
/// assert_eq!(normal("x//y/"), "x/y/");
/// assert_eq!(normal(&normal("x//y/")), normal("x//y/"));
/// # }
/// ```
#[must_use]
pub fn normal(path: &str) -> String {
    ParsedPath::parse(path).to_string()
}

/// Concatenate fragments with the separator and normalize the result.
///
/// Unlike [`resolve`], an absolute fragment in the middle does not reset
/// the path, because after concatenation it is no longer at the start.
///
/// # Examples
///
/// ```
/// use pathway::path::join;
///
/// # #[cfg(unix)] {
/// assert_eq!(join(["a", "/b", "c"]), "a/b/c");
/// assert_eq!(join(["/srv", "www/", "index.html"]), "/srv/www/index.html");
/// # }
/// ```
pub fn join<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = paths
        .into_iter()
        .map(|path| path.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR);
    normal(&joined)
}

/// Anchor a possibly relative path against a working directory.
///
/// The working directory is passed in explicitly; absolute paths ignore it.
///
/// # Examples
///
/// ```
/// use pathway::path::absolute;
///
/// # #[cfg(unix)] {
/// assert_eq!(absolute("/home/me", "src/../docs"), "/home/me/docs");
/// assert_eq!(absolute("/home/me", "/etc"), "/etc");
/// # }
/// ```
#[must_use]
pub fn absolute(cwd: &str, path: &str) -> String {
    resolve([join([cwd, ""]).as_str(), path])
}

/// The last segment of a path, optionally with a suffix removed.
///
/// The suffix is only stripped when it matches the end of the name exactly.
///
/// # Examples
///
/// ```
/// use pathway::path::basename;
///
/// assert_eq!(basename("src/lib.rs", None), "lib.rs");
/// assert_eq!(basename("src/lib.rs", Some(".rs")), "lib");
/// assert_eq!(basename("src/lib.rs", Some(".txt")), "lib.rs");
/// ```
#[must_use]
pub fn basename<'a>(path: &'a str, ext: Option<&str>) -> &'a str {
    let name = split(path).pop().unwrap_or("");
    match ext {
        Some(ext) if !ext.is_empty() => name.strip_suffix(ext).unwrap_or(name),
        _ => name,
    }
}

/// The parent directory of a path, or `.` when it has none.
///
/// # Examples
///
/// ```
/// use pathway::path::dirname;
///
/// # #[cfg(unix)] {
/// assert_eq!(dirname("/usr/lib/libc.so"), "/usr/lib");
/// assert_eq!(dirname("file.txt"), ".");
/// assert_eq!(dirname("/"), ".");
/// # }
/// ```
#[must_use]
pub fn dirname(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

/// The extension of the last segment, including its leading dot.
///
/// Leading dots are ignored so dotfiles are not mistaken for a bare
/// extension.
///
/// # Examples
///
/// ```
/// use pathway::path::extension;
///
/// assert_eq!(extension("archive.tar.gz"), ".gz");
/// assert_eq!(extension(".bashrc"), "");
/// assert_eq!(extension("README"), "");
/// ```
#[must_use]
pub fn extension(path: &str) -> &str {
    let name = basename(path, None).trim_start_matches('.');
    match name.rfind('.') {
        Some(index) if index > 0 => &name[index..],
        _ => "",
    }
}
