//! Commands that place a path relative to the working directory.

use clap::Args;

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions};

/// Print a path made absolute against the working directory.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to make absolute
    pub path: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        println!("{}", files.absolute(&self.path)?);
        Ok(())
    }
}

/// Print the path that leads from one directory to another.
#[derive(Args)]
pub struct RelativeCommand {
    /// Directory to start from
    pub from: String,

    /// Path to reach
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        println!("{}", files.relative(&self.from, &self.to)?);
        Ok(())
    }
}

/// Print the canonical path, with links followed.
#[derive(Args)]
pub struct CanonicalCommand {
    /// Existing path to canonicalize
    pub path: String,
}

impl CanonicalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        println!("{}", files.canonical(&self.path)?);
        Ok(())
    }
}
