//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command shares: global options,
//! configuration loading, building the `Files` instance commands operate
//! on, and output formatting.

use std::env;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use pathway::fs::{Files, LocalFs};
use pathway::{Config, ConfigBuilder, LogLevel, OpenOptions};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Working directory relative paths are resolved against.
    pub cwd: Option<PathBuf>,
}

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// The process working directory as a string.
fn process_dir() -> Result<String, CliError> {
    Ok(env::current_dir()?.to_string_lossy().into_owned())
}

/// Load hierarchical configuration.
///
/// Project files are searched for from `--cwd` when given, otherwise from
/// the process working directory.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.cwd {
        builder = builder.with_working_dir(dir);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The `log_mode` from configuration, for choosing the logger level.
///
/// A configuration that fails to load gives `None` here; commands that
/// read configuration report the failure themselves.
pub fn configured_log_level(global: &GlobalOptions) -> Option<LogLevel> {
    load_configuration(global)
        .ok()
        .and_then(|config| config.log_level())
}

/// Build the [`Files`] instance commands operate on.
///
/// The working directory is `--cwd`, else the configured `working_dir`,
/// else the process working directory. A relative choice is taken relative
/// to the process working directory. Configured open defaults apply to
/// every open.
pub fn open_files(global: &GlobalOptions, config: &Config) -> Result<Files, CliError> {
    let chosen = match (&global.cwd, &config.working_dir) {
        (Some(dir), _) => Some(dir.to_string_lossy().into_owned()),
        (None, Some(dir)) => Some(dir.clone()),
        (None, None) => None,
    };
    let base = process_dir()?;
    let working_dir = match chosen {
        Some(dir) => pathway::absolute(&base, &dir),
        None => base,
    };
    log::debug!("working directory: {working_dir}");

    Ok(Files::new(LocalFs::with_working_dir(working_dir)).with_defaults(config.open_defaults()))
}

/// Load configuration and build [`Files`] in one step.
pub fn setup(global: &GlobalOptions) -> Result<(Config, Files), CliError> {
    let config = load_configuration(global)?;
    let files = open_files(global, &config)?;
    Ok((config, files))
}

/// Build an options record from `key=value` assignments.
pub fn parse_assignments(assignments: &[String]) -> Result<Option<OpenOptions>, CliError> {
    if assignments.is_empty() {
        return Ok(None);
    }
    let mut options = OpenOptions::new();
    for assignment in assignments {
        options.set_assignment(assignment)?;
    }
    Ok(Some(options))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
