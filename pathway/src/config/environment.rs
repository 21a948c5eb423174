//! Environment variable handling for configuration overrides.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the default charset.
pub const CHARSET_ENV: &str = "PATHWAY_CHARSET";
/// Overrides the initial working directory.
pub const WORKING_DIR_ENV: &str = "PATHWAY_WORKING_DIR";
/// Overrides the log mode.
pub const LOG_MODE_ENV: &str = crate::logging::LOG_MODE_ENV;
/// Overrides the default mode string.
pub const DEFAULT_MODE_ENV: &str = "PATHWAY_DEFAULT_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathway::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHWAY_*` environment variables on top of `config`.
    ///
    /// Values are taken as strings here; they are checked when the merged
    /// configuration is validated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable is set to a value that is
    /// not valid Unicode.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(charset) = Self::read(CHARSET_ENV)? {
            config.charset = Some(charset);
        }
        if let Some(dir) = Self::read(WORKING_DIR_ENV)? {
            config.working_dir = Some(dir);
        }
        if let Some(mode) = Self::read(LOG_MODE_ENV)? {
            config.log_mode = Some(mode);
        }
        if let Some(mode) = Self::read(DEFAULT_MODE_ENV)? {
            config.default_mode = Some(mode);
        }
        Ok(())
    }

    fn read(name: &str) -> Result<Option<String>> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(Error::Validation {
                field: name.into(),
                message: "value is not valid Unicode".into(),
            }),
        }
    }
}
