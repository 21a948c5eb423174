//! Move and copy files.

use clap::Args;

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions};

/// Move or rename a path.
#[derive(Args)]
pub struct MvCommand {
    /// Path to move
    pub from: String,

    /// Destination
    pub to: String,
}

impl MvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        files.move_path(&self.from, &self.to)?;
        Ok(())
    }
}

/// Copy a file.
#[derive(Args)]
pub struct CpCommand {
    /// File to copy
    pub from: String,

    /// Destination file
    pub to: String,
}

impl CpCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        let bytes = files.copy(&self.from, &self.to)?;
        if global.verbose {
            eprintln!("copied {bytes} bytes");
        }
        Ok(())
    }
}
