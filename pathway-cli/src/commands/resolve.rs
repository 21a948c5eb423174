//! Commands that fold several path fragments into one.

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Resolve path fragments left to right.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path fragments; an absolute fragment discards everything before it
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathway::resolve(&self.paths));
        Ok(())
    }
}

/// Join path fragments and normalize the result.
#[derive(Args)]
pub struct JoinCommand {
    /// Path fragments to concatenate
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathway::join(&self.paths));
        Ok(())
    }
}

/// Print the normal form of a path.
#[derive(Args)]
pub struct NormalCommand {
    /// Path to normalize
    pub path: String,
}

impl NormalCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathway::normal(&self.path));
        Ok(())
    }
}
