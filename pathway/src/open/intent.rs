//! Resolution of a mode string and an options record into an open intent.

use std::fmt;

use serde::Serialize;

use super::charset::Charset;
use super::mode::{parse_mode, ModeFlag};
use super::options::OpenOptions;
use crate::error::{Error, Result};

/// The validated description of how a stream should be opened.
///
/// An intent is built once per open request and not changed afterwards;
/// [`OpenIntent::with_default_access`] returns a new value.
///
/// # Examples
///
/// ```
/// use pathway::open::OpenIntent;
///
/// let intent = OpenIntent::resolve(Some("a+"), None).unwrap();
/// assert!(intent.append && intent.update);
/// assert!(!intent.read && !intent.write);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenIntent {
    /// Open for reading.
    pub read: bool,
    /// Open for writing, truncating existing content.
    pub write: bool,
    /// Open for writing at the end of existing content.
    pub append: bool,
    /// Open for reading and writing on one stream.
    pub update: bool,
    /// Hand back a raw byte stream.
    pub binary: bool,
    /// Fail if the file already exists.
    pub exclusive: bool,
    /// Request canonical path handling.
    pub canonical: bool,
    /// Text encoding for text streams.
    pub charset: Option<String>,
}

/// The kind of stream an intent asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Raw bytes.
    Binary,
    /// Text in the given charset.
    Text(Charset),
}

impl OpenIntent {
    /// Merge a mode string on top of an options record.
    ///
    /// The options record is taken as the base and every flag named by the
    /// mode string is switched on; a mode string can add flags but never
    /// clear one. Access defaulting is not applied here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the mode string contains an
    /// unknown character. Nothing is merged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathway::open::{OpenIntent, OpenOptions};
    ///
    /// let options = OpenOptions { read: Some(true), ..Default::default() };
    /// let intent = OpenIntent::resolve(Some("b"), Some(&options)).unwrap();
    /// assert!(intent.read && intent.binary);
    ///
    /// assert!(OpenIntent::resolve(Some("z"), Some(&options)).is_err());
    /// ```
    pub fn resolve(mode: Option<&str>, options: Option<&OpenOptions>) -> Result<Self> {
        let flags = match mode {
            Some(mode) => parse_mode(mode)?,
            None => Vec::new(),
        };

        let mut intent = options.map(Self::from_options).unwrap_or_default();
        for flag in flags {
            intent.set(flag);
        }

        log::debug!(
            "resolved open intent '{intent}' from mode {mode:?} and {} options",
            if options.is_some() { "explicit" } else { "no" }
        );
        Ok(intent)
    }

    /// Resolve a bare mode string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an unknown mode character.
    pub fn from_mode(mode: &str) -> Result<Self> {
        Self::resolve(Some(mode), None)
    }

    /// Take the flags of an options record, treating unset as `false`.
    #[must_use]
    pub fn from_options(options: &OpenOptions) -> Self {
        let mut intent = Self {
            charset: options.charset.clone(),
            ..Self::default()
        };
        for flag in ModeFlag::ALL {
            if options.flag(flag).unwrap_or(false) {
                intent.set(flag);
            }
        }
        intent
    }

    /// Read a flag.
    #[must_use]
    pub fn flag(&self, flag: ModeFlag) -> bool {
        match flag {
            ModeFlag::Read => self.read,
            ModeFlag::Write => self.write,
            ModeFlag::Append => self.append,
            ModeFlag::Update => self.update,
            ModeFlag::Binary => self.binary,
            ModeFlag::Exclusive => self.exclusive,
            ModeFlag::Canonical => self.canonical,
        }
    }

    fn set(&mut self, flag: ModeFlag) {
        match flag {
            ModeFlag::Read => self.read = true,
            ModeFlag::Write => self.write = true,
            ModeFlag::Append => self.append = true,
            ModeFlag::Update => self.update = true,
            ModeFlag::Binary => self.binary = true,
            ModeFlag::Exclusive => self.exclusive = true,
            ModeFlag::Canonical => self.canonical = true,
        }
    }

    /// Whether any of read, write, append or update is set.
    #[must_use]
    pub fn has_access(&self) -> bool {
        self.read || self.write || self.append || self.update
    }

    /// Apply the consumer default: with no access flag set, open for reading.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathway::open::OpenIntent;
    ///
    /// let intent = OpenIntent::from_mode("x").unwrap().with_default_access();
    /// assert!(intent.read && intent.exclusive);
    /// ```
    #[must_use]
    pub fn with_default_access(mut self) -> Self {
        if !self.has_access() {
            self.read = true;
        }
        self
    }

    /// Decide which kind of stream satisfies this intent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] when update is requested and
    /// [`Error::InvalidArgument`] for an unknown charset on a text stream.
    pub fn stream_kind(&self) -> Result<StreamKind> {
        if self.update {
            return Err(Error::unsupported("open in update mode"));
        }
        if self.binary {
            return Ok(StreamKind::Binary);
        }
        let charset = match &self.charset {
            Some(name) => name.parse()?,
            None => Charset::default(),
        };
        Ok(StreamKind::Text(charset))
    }

    /// The mode string that expresses the same flags.
    #[must_use]
    pub fn mode_string(&self) -> String {
        ModeFlag::ALL
            .into_iter()
            .filter(|flag| self.flag(*flag))
            .map(ModeFlag::as_char)
            .collect()
    }
}

impl fmt::Display for OpenIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mode_string())?;
        if let Some(charset) = &self.charset {
            write!(f, " ({charset})")?;
        }
        Ok(())
    }
}
