//! List a directory.

use clap::Args;

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions, OutputFormat};

/// List the entries of a directory, sorted by name.
#[derive(Args)]
pub struct LsCommand {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl LsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        let mut names = files.list(&self.path)?;
        names.sort();
        match self.format {
            OutputFormat::Human => {
                for name in names {
                    println!("{name}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&names)?),
        }
        Ok(())
    }
}
