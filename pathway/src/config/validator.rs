//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::open::{parse_mode, Charset};

/// Checks that every configured value is usable.
///
/// # Examples
///
/// ```
/// use pathway::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { default_mode: Some("rq".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first field that is not
    /// usable.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(charset) = &config.charset {
            Self::validate_charset("charset", charset)?;
        }
        if let Some(mode) = &config.default_mode {
            parse_mode(mode).map_err(|e| Self::invalid("default_mode", &e))?;
        }
        if let Some(dir) = &config.working_dir {
            if dir.trim().is_empty() {
                return Err(Error::Validation {
                    field: "working_dir".into(),
                    message: "working directory cannot be empty".into(),
                });
            }
        }
        if let Some(mode) = &config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }
        if let Some(charset) = config.open.as_ref().and_then(|o| o.charset.as_deref()) {
            Self::validate_charset("open.charset", charset)?;
        }
        Ok(())
    }

    fn validate_charset(field: &str, name: &str) -> Result<()> {
        name.parse::<Charset>()
            .map(|_| ())
            .map_err(|e| Self::invalid(field, &e))
    }

    fn invalid(field: &str, cause: &Error) -> Error {
        let message = match cause {
            Error::InvalidArgument { message } => message.clone(),
            other => other.to_string(),
        };
        Error::Validation {
            field: field.into(),
            message,
        }
    }
}
