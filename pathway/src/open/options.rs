//! The options record accepted by `open`.
//!
//! In Rust code the record is a plain struct, so an unknown key cannot be
//! written at all. Records that arrive as text (configuration files, JSON,
//! `key=value` pairs on the command line) are checked against the same
//! closed key set and rejected on the first unknown key.

use serde::{Deserialize, Serialize};

use super::mode::ModeFlag;
use crate::error::{Error, Result};

/// Every key an options record may carry.
pub const OPTION_KEYS: [&str; 8] = [
    "read",
    "write",
    "append",
    "update",
    "binary",
    "exclusive",
    "canonical",
    "charset",
];

/// Options for opening a stream.
///
/// Unset fields mean "not requested". Mode string flags are OR-ed on top of
/// these when an [`OpenIntent`](super::OpenIntent) is resolved.
///
/// # Examples
///
/// ```
/// use pathway::open::OpenOptions;
///
/// let options = OpenOptions {
///     read: Some(true),
///     charset: Some("utf-8".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(options.read, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenOptions {
    /// Open for reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    /// Open for writing, truncating existing content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write: Option<bool>,
    /// Open for writing at the end of existing content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append: Option<bool>,
    /// Open for reading and writing on one stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<bool>,
    /// Hand back a raw byte stream instead of a text stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<bool>,
    /// Fail if the file already exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive: Option<bool>,
    /// Request canonical path handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<bool>,
    /// Text encoding for text streams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl OpenOptions {
    /// Create an empty options record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field from its textual key and value.
    ///
    /// Flag values are coerced to booleans (`true/false`, `1/0`, `yes/no`,
    /// `on/off`, case-insensitive); `charset` is taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an unknown key or a value that
    /// is not a recognizable boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathway::open::OpenOptions;
    ///
    /// let mut options = OpenOptions::new();
    /// options.set("append", "yes").unwrap();
    /// assert_eq!(options.append, Some(true));
    /// assert!(options.set("foo", "true").is_err());
    /// ```
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key == "charset" {
            self.charset = Some(value.to_string());
            return Ok(());
        }
        let flag = Self::flag_for_key(key)?;
        *self.flag_mut(flag) = Some(parse_bool(key, value)?);
        Ok(())
    }

    /// Build a record from `(key, value)` pairs.
    ///
    /// Stops at the first invalid pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] under the same rules as
    /// [`OpenOptions::set`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.set(key.as_ref(), value.as_ref())?;
        }
        Ok(options)
    }

    /// Parse a `key=value` assignment, as given on the command line.
    ///
    /// A bare `key` sets a flag to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] under the same rules as
    /// [`OpenOptions::set`].
    pub fn set_assignment(&mut self, assignment: &str) -> Result<()> {
        match assignment.split_once('=') {
            Some((key, value)) => self.set(key.trim(), value.trim()),
            None => self.set(assignment.trim(), "true"),
        }
    }

    /// Parse a JSON object into a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the text is not an object with
    /// only the known keys and well-typed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathway::open::OpenOptions;
    ///
    /// let options = OpenOptions::from_json(r#"{"read": true, "charset": "utf-8"}"#).unwrap();
    /// assert_eq!(options.read, Some(true));
    /// assert!(OpenOptions::from_json(r#"{"foo": true}"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::invalid_argument(format!("unsupported options: {e}")))
    }

    /// Read a flag.
    #[must_use]
    pub fn flag(&self, flag: ModeFlag) -> Option<bool> {
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

    fn flag_mut(&mut self, flag: ModeFlag) -> &mut Option<bool> {
        match flag {
            ModeFlag::Read => &mut self.read,
            ModeFlag::Write => &mut self.write,
            ModeFlag::Append => &mut self.append,
            ModeFlag::Update => &mut self.update,
            ModeFlag::Binary => &mut self.binary,
            ModeFlag::Exclusive => &mut self.exclusive,
            ModeFlag::Canonical => &mut self.canonical,
        }
    }

    fn flag_for_key(key: &str) -> Result<ModeFlag> {
        ModeFlag::ALL
            .into_iter()
            .find(|flag| flag.key() == key)
            .ok_or_else(|| Error::invalid_argument(format!("unsupported option: {key}")))
    }

    /// Fill fields that are unset here from `defaults`.
    ///
    /// Fields already set on `self` win.
    #[must_use]
    pub fn or(mut self, defaults: &Self) -> Self {
        for flag in ModeFlag::ALL {
            let field = self.flag_mut(flag);
            if field.is_none() {
                *field = defaults.flag(flag);
            }
        }
        if self.charset.is_none() {
            self.charset.clone_from(&defaults.charset);
        }
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::invalid_argument(format!(
            "option {key} expects a boolean, got '{value}'"
        ))),
    }
}
