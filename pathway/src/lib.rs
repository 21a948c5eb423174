#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathway
//!
//! Path algebra and open-mode negotiation over a pluggable filesystem
//! backend.
//!
//! ## Core Types
//!
//! - [`path`]: pure string-level path operations ([`resolve`], [`normal`],
//!   [`join`], [`relative`] and friends)
//! - [`OpenIntent`] and [`OpenOptions`]: turning a mode string and/or an
//!   options record into one validated description of an open request
//! - [`Files`] and [`FilesystemBackend`]: path-addressed file operations
//!   over a storage backend, with [`LocalFs`] for the local filesystem
//! - [`PathHandle`]: an immutable path value bound to a [`Files`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathway::{resolve, OpenIntent};
//!
//! # #[cfg(unix)] {
//! assert_eq!(resolve(["/usr", "local", "../lib"]), "/usr/lib");
//! # }
//!
//! let intent = OpenIntent::from_mode("wb").unwrap();
//! assert!(intent.write && intent.binary);
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod handle;
pub mod logging;
pub mod open;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use fs::{Content, Files, FilesystemBackend, LocalFs, Stream};
pub use handle::PathHandle;
pub use logging::{init_logger, init_logger_with, LogLevel, Logger};
pub use open::{Charset, OpenIntent, OpenOptions, StreamKind};
pub use path::{absolute, basename, dirname, extension, join, normal, relative, resolve, split};
