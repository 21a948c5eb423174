//! Show file metadata.

use clap::Args;
use serde::Serialize;

use crate::error::CliError;
use crate::utils::{format_timestamp, setup, GlobalOptions, OutputFormat};

/// Show metadata for a path. Fails with exit code 1 if it does not exist.
#[derive(Args)]
pub struct StatCommand {
    /// Path to inspect
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct StatReport {
    path: String,
    kind: &'static str,
    size: u64,
    modified: String,
    readable: bool,
    writable: bool,
}

impl StatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, files) = setup(global)?;
        let path = files.absolute(&self.path)?;
        if !files.exists(&path)? {
            return Err(CliError::SemanticFailure(format!("no such path: {path}")));
        }

        let kind = if files.is_directory(&path)? {
            "directory"
        } else if files.is_file(&path)? {
            "file"
        } else {
            "other"
        };
        let report = StatReport {
            kind,
            size: files.size(&path)?,
            modified: format_timestamp(files.mtime(&path)?),
            readable: files.is_readable(&path)?,
            writable: files.is_writable(&path)?,
            path,
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Human => {
                println!("path:     {}", report.path);
                println!("kind:     {}", report.kind);
                println!("size:     {}", report.size);
                println!("modified: {}", report.modified);
                println!("readable: {}", report.readable);
                println!("writable: {}", report.writable);
            }
        }
        Ok(())
    }
}
