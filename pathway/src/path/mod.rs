//! Platform-neutral path algebra.
//!
//! This module provides the string-level path operations used throughout
//! pathway. None of them touch the filesystem.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! [`resolve`] folds any number of fragments into one path, left to right.
//! Each fragment's last segment is held back as the *leaf*; if another
//! fragment follows, the leaf becomes a directory segment. An absolute
//! fragment throws away everything before it. `..` cancels one preceding
//! segment, is kept when a relative path has nothing left to cancel, and is
//! dropped at the root of an absolute path. A fragment ending in a
//! separator or `.` keeps its trailing separator.
//!
//! ## Normalization
//!
//! [`normal`] is one-fragment resolution and [`join`] is concatenation
//! followed by normalization. Both are idempotent.
//!
//! ## Working directory
//!
//! [`absolute`] takes the working directory as an argument rather than
//! reading process state; the live value is owned by the filesystem backend
//! (see [`crate::fs::Files::absolute`]).
//!
//! # Examples
//!
//! ```
//! use pathway::path::{basename, extension, join, resolve};
//!
//! # #[cfg(unix)] {
//! let path = resolve(["/var/www", "../log", "nginx/access.log"]);
//! assert_eq!(path, "/var/log/nginx/access.log");
//! assert_eq!(basename(&path, Some(".log")), "access");
//! assert_eq!(extension(&path), ".log");
//! assert_eq!(join(["/var", "log/"]), "/var/log/");
//! # }
//! ```

pub mod algebra;
pub mod relative;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types and functions
pub use algebra::{
    absolute, basename, dirname, extension, is_absolute, join, normal, resolve, split,
};
pub use relative::relative;
pub use types::ParsedPath;
