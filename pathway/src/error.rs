//! Error types for the pathway library.
//!
//! This module provides the error hierarchy for path handling, open-mode
//! negotiation and filesystem operations, using `thiserror` for ergonomic
//! error handling.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathway error.
///
/// # Examples
///
/// ```
/// use pathway::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/lib".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathway library.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was rejected before any I/O happened.
    ///
    /// Raised for blank paths, unknown option keys, unknown mode characters
    /// and unsupported charsets.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// A description of the rejected argument.
        message: String,
    },

    /// The requested operation has no implementation.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation {
        /// The operation that was requested.
        operation: String,
    },

    /// The filesystem backend reported a failure.
    #[error("{operation} failed for {}: {source}", paths.join(" -> "))]
    BackendFailure {
        /// The name of the operation that failed.
        operation: String,
        /// The path(s) the operation was applied to.
        paths: Vec<String>,
        /// The underlying backend error.
        #[source]
        source: io::Error,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// A path exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred outside of a backend operation.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] from any displayable message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build an [`Error::UnsupportedOperation`] for the named operation.
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
        }
    }

    /// Wrap a backend error with the operation name and the paths involved.
    pub fn backend<I, S>(operation: &str, paths: I, source: io::Error) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BackendFailure {
            operation: operation.to_string(),
            paths: paths.into_iter().map(Into::into).collect(),
            source,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// Backend failures whose underlying I/O error is `NotFound` count too.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathway::Error;
    ///
    /// let err = Error::NotFound { path: "/nonexistent".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::BackendFailure { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error was raised while validating caller input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
