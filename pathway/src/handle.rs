//! An immutable path value bound to a set of file operations.
//!
//! A [`PathHandle`] holds a path string and a shared [`Files`]. Algebraic
//! methods return a new handle; I/O methods delegate to [`Files`] with the
//! wrapped path. Operations with nothing to return hand back a handle so
//! calls can be chained.
//!
//! # Examples
//!
//! ```no_run
//! use pathway::fs::Files;
//!
//! let files = Files::local().unwrap();
//! let notes = files
//!     .path(["target", "notes"])
//!     .mkdirs()
//!     .unwrap()
//!     .join(["today.txt"])
//!     .write("remember the milk", None)
//!     .unwrap();
//! assert_eq!(notes.extension(), ".txt");
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::fs::{Content, Files, Stream};
use crate::open::OpenOptions;
use crate::path;

/// A path plus the operations to act on it.
#[derive(Debug, Clone)]
pub struct PathHandle {
    path: String,
    files: Files,
}

impl PathHandle {
    /// Wrap `path`. The string is kept as given.
    #[must_use]
    pub fn new(path: impl Into<String>, files: Files) -> Self {
        Self {
            path: path.into(),
            files,
        }
    }

    fn with_path(&self, path: impl Into<String>) -> Self {
        Self::new(path, self.files.clone())
    }

    /// The wrapped path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The operations this handle delegates to.
    #[must_use]
    pub fn files(&self) -> &Files {
        &self.files
    }

    /// Take the wrapped path.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }

    // Algebra

    /// This path with `parts` joined on.
    #[must_use]
    pub fn join<I, S>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = path::join(
            std::iter::once(self.path.clone())
                .chain(parts.into_iter().map(|p| p.as_ref().to_string())),
        );
        self.with_path(joined)
    }

    /// This path with `parts` resolved on top of it.
    #[must_use]
    pub fn resolve<I, S>(&self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = path::resolve(
            std::iter::once(self.path.clone())
                .chain(parts.into_iter().map(|p| p.as_ref().to_string())),
        );
        self.with_path(resolved)
    }

    /// The normal form of this path.
    #[must_use]
    pub fn normal(&self) -> Self {
        self.with_path(path::normal(&self.path))
    }

    /// This path made absolute against the working directory.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank.
    pub fn absolute(&self) -> Result<Self> {
        Ok(self.with_path(self.files.absolute(&self.path)?))
    }

    /// The canonical form of this path.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank or cannot be resolved.
    pub fn canonical(&self) -> Result<Self> {
        Ok(self.with_path(self.files.canonical(&self.path)?))
    }

    /// The path from this one to `to`.
    ///
    /// # Errors
    ///
    /// Fails if either path is blank.
    pub fn relative(&self, to: &str) -> Result<Self> {
        Ok(self.with_path(self.files.relative(&self.path, to)?))
    }

    /// The last segment, with `ext` removed if it matches.
    #[must_use]
    pub fn basename(&self, ext: Option<&str>) -> Self {
        self.with_path(path::basename(&self.path, ext))
    }

    /// The parent directory.
    #[must_use]
    pub fn dirname(&self) -> Self {
        self.with_path(path::dirname(&self.path))
    }

    /// The extension of the last segment, dot included.
    #[must_use]
    pub fn extension(&self) -> &str {
        path::extension(&self.path)
    }

    /// The raw segments.
    #[must_use]
    pub fn split(&self) -> Vec<&str> {
        path::split(&self.path)
    }

    /// Whether the path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        path::is_absolute(&self.path)
    }

    // I/O

    /// See [`Files::open`].
    ///
    /// # Errors
    ///
    /// Fails like [`Files::open`].
    pub fn open(&self, mode: Option<&str>, options: Option<&OpenOptions>) -> Result<Stream> {
        self.files.open(&self.path, mode, options)
    }

    /// See [`Files::read`].
    ///
    /// # Errors
    ///
    /// Fails like [`Files::read`].
    pub fn read(&self, options: Option<&OpenOptions>) -> Result<Content> {
        self.files.read(&self.path, options)
    }

    /// See [`Files::read_text`].
    ///
    /// # Errors
    ///
    /// Fails like [`Files::read_text`].
    pub fn read_text(&self) -> Result<String> {
        self.files.read_text(&self.path)
    }

    /// See [`Files::read_bytes`].
    ///
    /// # Errors
    ///
    /// Fails like [`Files::read_bytes`].
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        self.files.read_bytes(&self.path)
    }

    /// Write `content`, returning this handle.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::write`].
    pub fn write(&self, content: impl Into<Content>, options: Option<&OpenOptions>) -> Result<Self> {
        self.files.write(&self.path, content, options)?;
        Ok(self.clone())
    }

    /// Copy to `to`, returning a handle for the copy.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::copy`].
    pub fn copy(&self, to: &str) -> Result<Self> {
        self.files.copy(&self.path, to)?;
        Ok(self.with_path(to))
    }

    /// Move to `to`, returning a handle for the new location.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::move_path`].
    pub fn move_to(&self, to: &str) -> Result<Self> {
        self.files.move_path(&self.path, to)?;
        Ok(self.with_path(to))
    }

    /// Remove the file, returning this handle.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::remove`].
    pub fn remove(&self) -> Result<Self> {
        self.files.remove(&self.path)?;
        Ok(self.clone())
    }

    /// Remove the empty directory, returning this handle.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::rmdir`].
    pub fn rmdir(&self) -> Result<Self> {
        self.files.rmdir(&self.path)?;
        Ok(self.clone())
    }

    /// Remove the tree rooted here, returning this handle.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::rmtree`].
    pub fn rmtree(&self) -> Result<Self> {
        self.files.rmtree(&self.path)?;
        Ok(self.clone())
    }

    /// Create the directory, returning this handle.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::mkdir`].
    pub fn mkdir(&self) -> Result<Self> {
        self.files.mkdir(&self.path)?;
        Ok(self.clone())
    }

    /// Create the directory and its parents, returning this handle.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::mkdirs`].
    pub fn mkdirs(&self) -> Result<Self> {
        self.files.mkdirs(&self.path)?;
        Ok(self.clone())
    }

    /// Entry names of the directory.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::list`].
    pub fn list(&self) -> Result<Vec<String>> {
        self.files.list(&self.path)
    }

    /// Handles for every entry of the directory.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::list`].
    pub fn children(&self) -> Result<Vec<Self>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|name| self.join([name]))
            .collect())
    }

    /// Whether the path exists.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank.
    pub fn exists(&self) -> Result<bool> {
        self.files.exists(&self.path)
    }

    /// Whether the path is a regular file.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank.
    pub fn is_file(&self) -> Result<bool> {
        self.files.is_file(&self.path)
    }

    /// Whether the path is a directory.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank.
    pub fn is_directory(&self) -> Result<bool> {
        self.files.is_directory(&self.path)
    }

    /// Whether the path can be read.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank.
    pub fn is_readable(&self) -> Result<bool> {
        self.files.is_readable(&self.path)
    }

    /// Whether the path can be written.
    ///
    /// # Errors
    ///
    /// Fails if the path is blank.
    pub fn is_writable(&self) -> Result<bool> {
        self.files.is_writable(&self.path)
    }

    /// Size of the file in bytes.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::size`].
    pub fn size(&self) -> Result<u64> {
        self.files.size(&self.path)
    }

    /// Last modification time.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::mtime`].
    pub fn mtime(&self) -> Result<DateTime<Utc>> {
        self.files.mtime(&self.path)
    }
}

impl fmt::Display for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for PathHandle {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl PartialEq for PathHandle {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for PathHandle {}
