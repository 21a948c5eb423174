//! Library exports for pathway-cli.
//!
//! This module exports the CLI structure for use by the binary and by
//! documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
