//! Streams handed back by `open`.
//!
//! A backend only ever produces raw bytes ([`ByteStream`]). The operation
//! layer wraps them either as a [`BinaryStream`] or, with a charset, as a
//! [`TextStream`].

use std::fmt;
use std::io::{Read, Write};

use crate::error::{Error, Result};
use crate::open::Charset;

/// The raw handle a backend returns from `open_stream`.
pub enum ByteStream {
    /// A read-only handle.
    Reader(Box<dyn Read + Send>),
    /// A write-only handle.
    Writer(Box<dyn Write + Send>),
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reader(_) => f.write_str("ByteStream::Reader"),
            Self::Writer(_) => f.write_str("ByteStream::Writer"),
        }
    }
}

/// A byte stream bound to the path it was opened from.
#[derive(Debug)]
pub struct BinaryStream {
    path: String,
    inner: ByteStream,
}

impl BinaryStream {
    /// Wrap a backend handle.
    #[must_use]
    pub fn new(path: impl Into<String>, inner: ByteStream) -> Self {
        Self {
            path: path.into(),
            inner,
        }
    }

    /// The resolved path this stream was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the stream can be read from.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        matches!(self.inner, ByteStream::Reader(_))
    }

    /// Whether the stream can be written to.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        matches!(self.inner, ByteStream::Writer(_))
    }

    /// Read everything that is left in the stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] on a write-only stream and
    /// [`Error::BackendFailure`] if the read fails.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let ByteStream::Reader(reader) = &mut self.inner else {
            return Err(Error::unsupported(format!(
                "read from write-only stream {}",
                self.path
            )));
        };
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(|e| Error::backend("read", [self.path.as_str()], e))?;
        Ok(buffer)
    }

    /// Write all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] on a read-only stream and
    /// [`Error::BackendFailure`] if the write fails.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let Self { path, inner } = self;
        match inner {
            ByteStream::Writer(writer) => writer
                .write_all(bytes)
                .map_err(|e| Error::backend("write", [path.as_str()], e)),
            ByteStream::Reader(_) => Err(Error::unsupported(format!(
                "write to read-only stream {path}"
            ))),
        }
    }

    /// Flush buffered output. A no-op on read-only streams.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendFailure`] if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        match &mut self.inner {
            ByteStream::Reader(_) => Ok(()),
            ByteStream::Writer(writer) => writer
                .flush()
                .map_err(|e| Error::backend("flush", [self.path.as_str()], e)),
        }
    }
}

/// A byte stream decoded and encoded with a charset.
#[derive(Debug)]
pub struct TextStream {
    inner: BinaryStream,
    charset: Charset,
}

impl TextStream {
    /// Wrap a byte stream with a charset.
    #[must_use]
    pub fn new(inner: BinaryStream, charset: Charset) -> Self {
        Self { inner, charset }
    }

    /// The charset used for this stream.
    #[must_use]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// The resolved path this stream was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        self.inner.path()
    }

    /// Read and decode everything that is left in the stream.
    ///
    /// # Errors
    ///
    /// Fails like [`BinaryStream::read_all`], or with an `InvalidData` I/O
    /// error if the content is not valid in the charset.
    pub fn read_to_string(&mut self) -> Result<String> {
        let bytes = self.inner.read_all()?;
        self.charset.decode(&bytes)
    }

    /// Encode and write `text`.
    ///
    /// # Errors
    ///
    /// Fails like [`BinaryStream::write_all`], or with an `InvalidData` I/O
    /// error if the text cannot be represented in the charset.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        let bytes = self.charset.encode(text)?;
        self.inner.write_all(&bytes)
    }

    /// Flush buffered output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendFailure`] if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }

    /// Unwrap the underlying byte stream.
    #[must_use]
    pub fn into_inner(self) -> BinaryStream {
        self.inner
    }
}

/// A stream returned by [`Files::open`](super::Files::open).
#[derive(Debug)]
pub enum Stream {
    /// Raw bytes, requested with the binary flag.
    Binary(BinaryStream),
    /// Decoded text.
    Text(TextStream),
}

impl Stream {
    /// Whether this is a byte stream.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// The resolved path this stream was opened from.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Binary(stream) => stream.path(),
            Self::Text(stream) => stream.path(),
        }
    }

    /// Flush buffered output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BackendFailure`] if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        match self {
            Self::Binary(stream) => stream.flush(),
            Self::Text(stream) => stream.flush(),
        }
    }

    /// Take the byte stream, if this is one.
    #[must_use]
    pub fn into_binary(self) -> Option<BinaryStream> {
        match self {
            Self::Binary(stream) => Some(stream),
            Self::Text(_) => None,
        }
    }

    /// Take the text stream, if this is one.
    #[must_use]
    pub fn into_text(self) -> Option<TextStream> {
        match self {
            Self::Text(stream) => Some(stream),
            Self::Binary(_) => None,
        }
    }
}
