//! Create directories.

use clap::Args;

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions};

/// Create a directory.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    pub path: String,

    /// Create missing parents too
    #[arg(short, long)]
    pub parents: bool,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        if self.parents {
            files.mkdirs(&self.path)?;
        } else {
            files.mkdir(&self.path)?;
        }
        Ok(())
    }
}
