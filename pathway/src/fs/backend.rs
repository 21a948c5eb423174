//! The storage seam.
//!
//! [`FilesystemBackend`] is the capability surface the operation layer
//! consumes. Implementations receive paths that are already validated and
//! made absolute, and report failures as plain `io::Error`s; the operation
//! layer wraps them with the operation name and paths.

use std::io;
use std::time::SystemTime;

use super::stream::ByteStream;
use crate::open::OpenIntent;

/// Storage I/O used by [`Files`](super::Files).
///
/// Every method is synchronous and may block. Implementations must not
/// retry.
#[cfg_attr(test, mockall::automock)]
pub trait FilesystemBackend: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Whether `path` is a regular file.
    fn is_file(&self, path: &str) -> bool;

    /// Whether `path` is a directory.
    fn is_directory(&self, path: &str) -> bool;

    /// Whether `path` can be read.
    fn is_readable(&self, path: &str) -> bool;

    /// Whether `path` can be written.
    fn is_writable(&self, path: &str) -> bool;

    /// Names of the entries in the directory at `path`.
    ///
    /// # Errors
    ///
    /// Fails if `path` cannot be listed.
    fn list(&self, path: &str) -> io::Result<Vec<String>>;

    /// Size in bytes of the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the metadata cannot be read.
    fn size(&self, path: &str) -> io::Result<u64>;

    /// Last modification time of `path`.
    ///
    /// # Errors
    ///
    /// Fails if the metadata cannot be read.
    fn mtime(&self, path: &str) -> io::Result<SystemTime>;

    /// Create a single directory.
    ///
    /// # Errors
    ///
    /// Fails if the parent is missing or the directory cannot be created.
    fn mkdir(&self, path: &str) -> io::Result<()>;

    /// Create a directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Fails if any directory cannot be created.
    fn mkdirs(&self, path: &str) -> io::Result<()>;

    /// Move `from` to `to`.
    ///
    /// # Errors
    ///
    /// Fails if the move is rejected.
    fn rename(&self, from: &str, to: &str) -> io::Result<()>;

    /// Copy the file `from` to `to`, returning the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Fails if either side cannot be opened or the copy is interrupted.
    fn copy(&self, from: &str, to: &str) -> io::Result<u64>;

    /// Remove the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be removed.
    fn remove_file(&self, path: &str) -> io::Result<()>;

    /// Remove the empty directory at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be removed.
    fn remove_dir(&self, path: &str) -> io::Result<()>;

    /// The canonical form of `path`, with links followed.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not exist or cannot be resolved.
    fn canonicalize(&self, path: &str) -> io::Result<String>;

    /// Open `path` as described by `intent`.
    ///
    /// The intent has already been defaulted and checked by the caller.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened.
    fn open_stream(&self, path: &str, intent: &OpenIntent) -> io::Result<ByteStream>;

    /// The directory relative paths are resolved against.
    fn working_directory(&self) -> String;

    /// Replace the working directory.
    ///
    /// # Errors
    ///
    /// Fails if `path` cannot be used as a working directory.
    fn set_working_directory(&self, path: &str) -> io::Result<()>;
}
