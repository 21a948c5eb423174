//! Filesystem operations.
//!
//! The layer is split in two:
//!
//! - [`FilesystemBackend`] performs raw storage I/O on absolute paths.
//!   [`LocalFs`] implements it over `std::fs`.
//! - [`Files`] is what callers use. It validates path arguments, makes them
//!   absolute against the backend's working directory, negotiates open
//!   modes, wraps backend failures and hands back typed streams.
//!
//! # Examples
//!
//! ```no_run
//! use pathway::fs::{Content, Files};
//!
//! let files = Files::local().unwrap();
//! files.mkdirs("build/out").unwrap();
//! files.write("build/out/data.bin", vec![0u8, 1, 2], None).unwrap();
//! assert_eq!(files.read_bytes("build/out/data.bin").unwrap(), vec![0, 1, 2]);
//! files.rmtree("build").unwrap();
//! ```

mod backend;
mod files;
mod local;
mod stream;

pub use backend::FilesystemBackend;
pub use files::{Content, Files};
pub use local::LocalFs;
pub use stream::{BinaryStream, ByteStream, Stream, TextStream};
