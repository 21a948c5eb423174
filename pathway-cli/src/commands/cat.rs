//! Print the content of a file.

use std::io::{self, Write};

use clap::Args;
use pathway::fs::Stream;
use pathway::{OpenIntent, OpenOptions};

use crate::error::CliError;
use crate::utils::{setup, GlobalOptions};

/// Print a file to standard output.
#[derive(Args)]
pub struct CatCommand {
    /// File to read
    pub path: String,

    /// Copy raw bytes instead of decoding text
    #[arg(long)]
    pub binary: bool,

    /// Charset used to decode text
    #[arg(long, value_name = "CHARSET", conflicts_with = "binary")]
    pub charset: Option<String>,

    /// Mode string; must not request writing (defaults to the configured mode, else `r`)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,
}

impl CatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, files) = setup(global)?;
        let mode = self
            .mode
            .or(config.default_mode)
            .unwrap_or_else(|| "r".to_string());

        let check = OpenIntent::from_mode(&mode)?;
        if check.write || check.append || check.update {
            return Err(CliError::InvalidArguments(format!(
                "cat cannot open with write access (mode '{mode}')"
            )));
        }

        let options = OpenOptions {
            binary: self.binary.then_some(true),
            charset: self.charset,
            ..Default::default()
        };

        let mut stdout = io::stdout().lock();
        match files.open(&self.path, Some(&mode), Some(&options))? {
            Stream::Binary(mut stream) => stdout.write_all(&stream.read_all()?)?,
            Stream::Text(mut stream) => stdout.write_all(stream.read_to_string()?.as_bytes())?,
        }
        stdout.flush()?;
        Ok(())
    }
}
