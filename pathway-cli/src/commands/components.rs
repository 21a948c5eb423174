//! Commands that take a path apart.

use clap::Args;

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat};

/// Print the raw segments of a path.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl SplitCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let segments = pathway::split(&self.path);
        match self.format {
            OutputFormat::Human => {
                for segment in segments {
                    println!("{segment}");
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&segments)?),
        }
        Ok(())
    }
}

/// Print the last segment of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to take the name from
    pub path: String,

    /// Suffix to strip when it matches exactly
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathway::basename(&self.path, self.ext.as_deref()));
        Ok(())
    }
}

/// Print the parent directory of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to take the parent of
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathway::dirname(&self.path));
        Ok(())
    }
}

/// Print the extension of a path, dot included.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Path to take the extension of
    pub path: String,
}

impl ExtensionCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathway::extension(&self.path));
        Ok(())
    }
}
