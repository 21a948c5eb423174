//! Path-level file operations on top of a backend.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::backend::FilesystemBackend;
use super::local::LocalFs;
use super::stream::{BinaryStream, Stream, TextStream};
use crate::error::{Error, Result};
use crate::handle::PathHandle;
use crate::open::{Charset, OpenIntent, OpenOptions, StreamKind};
use crate::path;

/// Content read from or written to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Decoded text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

impl Content {
    /// Whether this is raw bytes.
    #[must_use]
    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes(_))
    }

    /// The content as bytes, UTF-8 encoding text.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// File operations addressed by path.
///
/// Every path argument is checked and made absolute against the backend's
/// working directory before the backend sees it. Backend failures come back
/// as [`Error::BackendFailure`] naming the operation and the path(s).
///
/// `Files` is cheap to clone; clones share the backend.
///
/// # Examples
///
/// ```no_run
/// use pathway::fs::{Files, LocalFs};
///
/// let files = Files::new(LocalFs::with_working_dir("/tmp"));
/// files.write("notes.txt", "hello", None).unwrap();
/// assert_eq!(files.read_text("notes.txt").unwrap(), "hello");
/// ```
#[derive(Clone)]
pub struct Files {
    backend: Arc<dyn FilesystemBackend>,
    defaults: OpenOptions,
}

impl fmt::Debug for Files {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Files")
            .field("working_dir", &self.backend.working_directory())
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Files {
    /// Operations over `backend`.
    pub fn new(backend: impl FilesystemBackend + 'static) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    /// Operations over a shared backend.
    #[must_use]
    pub fn from_arc(backend: Arc<dyn FilesystemBackend>) -> Self {
        Self {
            backend,
            defaults: OpenOptions::new(),
        }
    }

    /// Operations over the local filesystem, starting in the process
    /// working directory.
    ///
    /// # Errors
    ///
    /// Fails if the process working directory cannot be determined.
    pub fn local() -> Result<Self> {
        Ok(Self::new(LocalFs::new()?))
    }

    /// Use `defaults` for every option a caller leaves unset.
    #[must_use]
    pub fn with_defaults(mut self, defaults: OpenOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// The options applied beneath every open request.
    #[must_use]
    pub fn defaults(&self) -> &OpenOptions {
        &self.defaults
    }

    /// The backend this instance delegates to.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn FilesystemBackend> {
        &self.backend
    }

    fn resolve_file(&self, path: &str) -> Result<String> {
        if path.trim().is_empty() {
            return Err(Error::invalid_argument("undefined path argument"));
        }
        Ok(path::absolute(&self.backend.working_directory(), path))
    }

    /// The defaults to merge beneath `requested`, without their access
    /// flags when the request already names one.
    fn defaults_beneath(&self, requested: &OpenIntent) -> OpenOptions {
        let mut defaults = self.defaults.clone();
        if requested.has_access() {
            defaults.read = None;
            defaults.write = None;
            defaults.append = None;
            defaults.update = None;
        }
        defaults
    }

    /// A [`PathHandle`] for the joined `parts`.
    pub fn path<I, S>(&self, parts: I) -> PathHandle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PathHandle::new(path::join(parts), self.clone())
    }

    /// The current working directory.
    #[must_use]
    pub fn cwd(&self) -> String {
        self.backend.working_directory()
    }

    /// Change the working directory to the canonical form of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the directory cannot be resolved or
    /// used.
    pub fn chdir(&self, path: &str) -> Result<()> {
        let target = self.resolve_file(path)?;
        let canonical = self
            .backend
            .canonicalize(&target)
            .map_err(|e| Error::backend("chdir", [target.as_str()], e))?;
        self.backend
            .set_working_directory(&canonical)
            .map_err(|e| Error::backend("chdir", [canonical.as_str()], e))?;
        log::debug!("working directory is now {canonical}");
        Ok(())
    }

    /// Whether `path` is absolute. Pure; no I/O.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        path::is_absolute(path)
    }

    /// `path` made absolute against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path.
    pub fn absolute(&self, path: &str) -> Result<String> {
        self.resolve_file(path)
    }

    /// The canonical form of `path`, with links followed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the path cannot be resolved.
    pub fn canonical(&self, path: &str) -> Result<String> {
        let file = self.resolve_file(path)?;
        self.backend
            .canonicalize(&file)
            .map_err(|e| Error::backend("canonical", [file.as_str()], e))
    }

    /// The path that leads from `from` to `to`, both taken relative to the
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either path is blank.
    pub fn relative(&self, from: &str, to: &str) -> Result<String> {
        let from = self.resolve_file(from)?;
        let to = self.resolve_file(to)?;
        Ok(path::relative(&from, &to))
    }

    /// Open `path` with a mode string and/or options.
    ///
    /// Options unset by the caller fall back to this instance's defaults.
    /// Access flags (read, write, append, update) come from the defaults
    /// only when the mode string and options name none. With no access
    /// flag at all the file is opened for reading. Binary requests
    /// get a [`Stream::Binary`], everything else a [`Stream::Text`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path, a bad mode
    /// string or an unknown charset, [`Error::UnsupportedOperation`] for
    /// update mode and [`Error::BackendFailure`] if the file cannot be
    /// opened. All argument checks happen before the backend is called.
    pub fn open(
        &self,
        path: &str,
        mode: Option<&str>,
        options: Option<&OpenOptions>,
    ) -> Result<Stream> {
        let file = self.resolve_file(path)?;
        let requested = OpenIntent::resolve(mode, options)?;
        let options = options
            .cloned()
            .unwrap_or_default()
            .or(&self.defaults_beneath(&requested));
        let intent = OpenIntent::resolve(mode, Some(&options))?.with_default_access();
        let kind = intent.stream_kind()?;

        log::debug!("open {file} as '{intent}'");
        let raw = self
            .backend
            .open_stream(&file, &intent)
            .map_err(|e| Error::backend("open", [file.as_str()], e))?;
        let binary = BinaryStream::new(file, raw);
        Ok(match kind {
            StreamKind::Binary => Stream::Binary(binary),
            StreamKind::Text(charset) => Stream::Text(TextStream::new(binary, charset)),
        })
    }

    /// Read a whole file. Text unless `options` ask for binary.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::open`], or if the content cannot be read or
    /// decoded.
    pub fn read(&self, path: &str, options: Option<&OpenOptions>) -> Result<Content> {
        match self.open(path, Some("r"), options)? {
            Stream::Binary(mut stream) => stream.read_all().map(Content::Bytes),
            Stream::Text(mut stream) => stream.read_to_string().map(Content::Text),
        }
    }

    /// Read a whole file as text.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::read`].
    pub fn read_text(&self, path: &str) -> Result<String> {
        match self.read(path, None)? {
            Content::Text(text) => Ok(text),
            Content::Bytes(bytes) => Charset::default().decode(&bytes),
        }
    }

    /// Read a whole file as bytes.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::open`], or if the content cannot be read.
    pub fn read_bytes(&self, path: &str) -> Result<Vec<u8>> {
        match self.open(path, Some("rb"), None)? {
            Stream::Binary(mut stream) => stream.read_all(),
            Stream::Text(mut stream) => stream.read_to_string().map(String::into_bytes),
        }
    }

    /// Write `content` to `path`, replacing what was there unless the
    /// options ask to append.
    ///
    /// # Errors
    ///
    /// Fails like [`Files::open`], or if the content cannot be encoded or
    /// written.
    pub fn write(
        &self,
        path: &str,
        content: impl Into<Content>,
        options: Option<&OpenOptions>,
    ) -> Result<()> {
        let content = content.into();
        let mode = if content.is_bytes() { "wb" } else { "w" };
        let mut stream = self.open(path, Some(mode), options)?;
        match (&mut stream, content) {
            (Stream::Text(out), Content::Text(text)) => out.write_str(&text)?,
            (Stream::Text(out), Content::Bytes(bytes)) => {
                out.write_str(&Charset::default().decode(&bytes)?)?;
            }
            (Stream::Binary(out), content) => out.write_all(&content.into_bytes())?,
        }
        stream.flush()
    }

    /// Copy the file `from` to `to`, returning the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the copy fails.
    pub fn copy(&self, from: &str, to: &str) -> Result<u64> {
        let from = self.resolve_file(from)?;
        let to = self.resolve_file(to)?;
        log::debug!("copy {from} -> {to}");
        self.backend
            .copy(&from, &to)
            .map_err(|e| Error::backend("copy", [from, to], e))
    }

    /// Move `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the move fails.
    pub fn move_path(&self, from: &str, to: &str) -> Result<()> {
        let from = self.resolve_file(from)?;
        let to = self.resolve_file(to)?;
        log::debug!("move {from} -> {to}");
        self.backend
            .rename(&from, &to)
            .map_err(|e| Error::backend("move", [from, to], e))
    }

    /// Remove the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the file cannot be removed.
    pub fn remove(&self, path: &str) -> Result<()> {
        let file = self.resolve_file(path)?;
        self.backend
            .remove_file(&file)
            .map_err(|e| Error::backend("remove", [file], e))
    }

    /// Remove the empty directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the directory cannot be removed.
    pub fn rmdir(&self, path: &str) -> Result<()> {
        let dir = self.resolve_file(path)?;
        self.backend
            .remove_dir(&dir)
            .map_err(|e| Error::backend("rmdir", [dir], e))
    }

    /// Remove `path` and, for a directory, everything below it.
    ///
    /// Children are removed depth-first before their directory. The first
    /// failure stops the walk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] for the first entry that cannot be listed
    /// or removed.
    pub fn rmtree(&self, path: &str) -> Result<()> {
        let root = self.resolve_file(path)?;
        self.remove_tree(&root)
    }

    fn remove_tree(&self, path: &str) -> Result<()> {
        if !self.backend.is_directory(path) {
            return self
                .backend
                .remove_file(path)
                .map_err(|e| Error::backend("rmtree", [path], e));
        }
        let children = self
            .backend
            .list(path)
            .map_err(|e| Error::backend("rmtree", [path], e))?;
        for name in children {
            self.remove_tree(&path::join([path, name.as_str()]))?;
        }
        log::debug!("rmtree removing directory {path}");
        self.backend
            .remove_dir(path)
            .map_err(|e| Error::backend("rmtree", [path], e))
    }

    /// Create the directory `path`. Its parent must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the directory cannot be created.
    pub fn mkdir(&self, path: &str) -> Result<()> {
        let dir = self.resolve_file(path)?;
        self.backend
            .mkdir(&dir)
            .map_err(|e| Error::backend("mkdir", [dir], e))
    }

    /// Create the directory `path` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if a directory cannot be created.
    pub fn mkdirs(&self, path: &str) -> Result<()> {
        let dir = self.resolve_file(path)?;
        self.backend
            .mkdirs(&dir)
            .map_err(|e| Error::backend("mkdirs", [dir], e))
    }

    /// Names of the entries in the directory `path`, in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if nothing exists at `path`,
    /// [`Error::NotADirectory`] if it is not a directory and
    /// [`Error::BackendFailure`] for any other listing failure.
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        let dir = self.resolve_file(path)?;
        self.backend.list(&dir).map_err(|e| {
            if !self.backend.exists(&dir) {
                Error::NotFound { path: dir }
            } else if !self.backend.is_directory(&dir) {
                Error::NotADirectory { path: dir }
            } else {
                Error::backend("list", [dir], e)
            }
        })
    }

    /// Size of the file at `path` in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the size cannot be read.
    pub fn size(&self, path: &str) -> Result<u64> {
        let file = self.resolve_file(path)?;
        self.backend
            .size(&file)
            .map_err(|e| Error::backend("size", [file], e))
    }

    /// Last modification time of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path and
    /// [`Error::BackendFailure`] if the time cannot be read.
    pub fn mtime(&self, path: &str) -> Result<DateTime<Utc>> {
        let file = self.resolve_file(path)?;
        self.backend
            .mtime(&file)
            .map(DateTime::<Utc>::from)
            .map_err(|e| Error::backend("mtime", [file], e))
    }

    /// Whether anything exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path.
    pub fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.backend.exists(&self.resolve_file(path)?))
    }

    /// Whether `path` is a regular file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path.
    pub fn is_file(&self, path: &str) -> Result<bool> {
        Ok(self.backend.is_file(&self.resolve_file(path)?))
    }

    /// Whether `path` is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path.
    pub fn is_directory(&self, path: &str) -> Result<bool> {
        Ok(self.backend.is_directory(&self.resolve_file(path)?))
    }

    /// Whether `path` can be read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path.
    pub fn is_readable(&self, path: &str) -> Result<bool> {
        Ok(self.backend.is_readable(&self.resolve_file(path)?))
    }

    /// Whether `path` can be written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a blank path.
    pub fn is_writable(&self, path: &str) -> Result<bool> {
        Ok(self.backend.is_writable(&self.resolve_file(path)?))
    }
}
