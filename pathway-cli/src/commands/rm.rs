//! Remove files and directories.

use clap::Args;

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions};

/// Remove a file, an empty directory, or a whole tree.
#[derive(Args)]
pub struct RmCommand {
    /// Path to remove
    pub path: String,

    /// Remove a directory and everything below it
    #[arg(short, long)]
    pub recursive: bool,

    /// Remove an empty directory
    #[arg(short, long, conflicts_with = "recursive")]
    pub dir: bool,
}

impl RmCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        if self.recursive {
            files.rmtree(&self.path)?;
        } else if self.dir {
            files.rmdir(&self.path)?;
        } else {
            files.remove(&self.path)?;
        }
        Ok(())
    }
}
