//! Open-mode negotiation.
//!
//! This module turns a mode string and/or an options record into a single
//! canonical [`OpenIntent`]. It performs no I/O.
//!
//! The stages are:
//!
//! 1. The options record is validated. For [`OpenOptions`] built in code this
//!    is done by the type system; records parsed from text are checked
//!    against the closed key set ([`OPTION_KEYS`]).
//! 2. The mode string is translated character by character ([`parse_mode`])
//!    and its flags are OR-ed on top of the record.
//! 3. The consumer applies the access default
//!    ([`OpenIntent::with_default_access`]) and picks a stream kind
//!    ([`OpenIntent::stream_kind`]).
//!
//! # Examples
//!
//! ```
//! use pathway::open::{Charset, OpenIntent, OpenOptions, StreamKind};
//!
//! let options = OpenOptions::from_pairs([("charset", "latin1")]).unwrap();
//! let intent = OpenIntent::resolve(Some("x"), Some(&options))
//!     .unwrap()
//!     .with_default_access();
//!
//! assert!(intent.read && intent.exclusive);
//! assert_eq!(intent.stream_kind().unwrap(), StreamKind::Text(Charset::Latin1));
//! ```

mod charset;
mod intent;
mod mode;
mod options;

pub use charset::Charset;
pub use intent::{OpenIntent, StreamKind};
pub use mode::{parse_mode, ModeFlag};
pub use options::{OpenOptions, OPTION_KEYS};
