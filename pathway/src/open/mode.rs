//! Mode string parsing.
//!
//! A mode string is a compact spelling of the open flags, one character per
//! flag. It is only a translation layer: parsing produces the same
//! [`OpenIntent`](super::OpenIntent) the options record does.

use std::fmt;

use crate::error::{Error, Result};

/// A single flag that a mode string character can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeFlag {
    /// `r`
    Read,
    /// `w`
    Write,
    /// `a`
    Append,
    /// `+`
    Update,
    /// `b`
    Binary,
    /// `x`
    Exclusive,
    /// `c`
    Canonical,
}

impl ModeFlag {
    /// Every flag, in mode string order.
    pub const ALL: [Self; 7] = [
        Self::Read,
        Self::Write,
        Self::Append,
        Self::Update,
        Self::Binary,
        Self::Exclusive,
        Self::Canonical,
    ];

    /// Map a mode character to its flag.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Self::Read),
            'w' => Some(Self::Write),
            'a' => Some(Self::Append),
            '+' => Some(Self::Update),
            'b' => Some(Self::Binary),
            'x' => Some(Self::Exclusive),
            'c' => Some(Self::Canonical),
            _ => None,
        }
    }

    /// The mode character for this flag.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Read => 'r',
            Self::Write => 'w',
            Self::Append => 'a',
            Self::Update => '+',
            Self::Binary => 'b',
            Self::Exclusive => 'x',
            Self::Canonical => 'c',
        }
    }

    /// The options record key that carries the same flag.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Append => "append",
            Self::Update => "update",
            Self::Binary => "binary",
            Self::Exclusive => "exclusive",
            Self::Canonical => "canonical",
        }
    }
}

impl fmt::Display for ModeFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parse a mode string into its flags.
///
/// The whole string is checked before anything is returned, so a bad
/// character never yields a partial result. Repeated characters are
/// harmless.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the mode string if any
/// character is outside `r w a + b x c`.
///
/// # Examples
///
/// ```
/// use pathway::open::{parse_mode, ModeFlag};
///
/// assert_eq!(parse_mode("wb").unwrap(), vec![ModeFlag::Write, ModeFlag::Binary]);
/// assert!(parse_mode("rz").is_err());
/// ```
pub fn parse_mode(mode: &str) -> Result<Vec<ModeFlag>> {
    mode.chars()
        .map(|c| {
            ModeFlag::from_char(c)
                .ok_or_else(|| Error::invalid_argument(format!("unsupported mode argument: {mode}")))
        })
        .collect()
}
