//! Text encodings supported by text streams.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A character set a text stream can decode and encode.
///
/// Names are matched case-insensitively and ignore `-` and `_`, so
/// `UTF-8`, `utf8` and `utf_8` are the same charset.
///
/// # Examples
///
/// ```
/// use pathway::open::Charset;
///
/// let charset: Charset = "ISO-8859-1".parse().unwrap();
/// assert_eq!(charset, Charset::Latin1);
/// assert_eq!(charset.decode(&[0x63, 0x61, 0x66, 0xe9]).unwrap(), "café");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8, the platform default.
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    /// US-ASCII: bytes above 0x7f are rejected.
    Ascii,
}

impl Charset {
    /// Canonical name of the charset.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "iso-8859-1",
            Self::Ascii => "us-ascii",
        }
    }

    /// Decode bytes into text.
    ///
    /// # Errors
    ///
    /// Returns an I/O error of kind `InvalidData` if the bytes are not valid
    /// in this charset.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| invalid_data(self, e)),
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Ascii => {
                if let Some(b) = bytes.iter().find(|b| !b.is_ascii()) {
                    return Err(invalid_data(self, format!("byte 0x{b:02x}")));
                }
                Ok(bytes.iter().map(|&b| char::from(b)).collect())
            }
        }
    }

    /// Encode text into bytes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error of kind `InvalidData` if the text contains a
    /// character this charset cannot represent.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 | Self::Ascii => {
                let limit = if self == Self::Latin1 { 0xff } else { 0x7f };
                text.chars()
                    .map(|c| match u8::try_from(u32::from(c)) {
                        Ok(b) if u32::from(b) <= limit => Ok(b),
                        _ => Err(invalid_data(self, format!("character {c:?}"))),
                    })
                    .collect()
            }
        }
    }
}

fn invalid_data(charset: Charset, detail: impl fmt::Display) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("not valid {}: {detail}", charset.name()),
    ))
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "utf8" => Ok(Self::Utf8),
            "iso88591" | "latin1" => Ok(Self::Latin1),
            "usascii" | "ascii" => Ok(Self::Ascii),
            _ => Err(Error::invalid_argument(format!("unsupported charset: {s}"))),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
