//! Write text to a file.

use clap::Args;
use pathway::OpenOptions;

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions};

/// Write text to a file, replacing its content.
#[derive(Args)]
pub struct WriteCommand {
    /// File to write
    pub path: String,

    /// Text to write
    pub text: String,

    /// Append instead of replacing
    #[arg(long)]
    pub append: bool,

    /// Fail if the file already exists
    #[arg(long)]
    pub exclusive: bool,

    /// Charset used to encode the text
    #[arg(long, value_name = "CHARSET")]
    pub charset: Option<String>,
}

impl WriteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        let options = OpenOptions {
            append: self.append.then_some(true),
            exclusive: self.exclusive.then_some(true),
            charset: self.charset,
            ..Default::default()
        };
        files.write(&self.path, self.text, Some(&options))?;
        if global.verbose {
            eprintln!("wrote {}", files.absolute(&self.path)?);
        }
        Ok(())
    }
}
