//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::open::OpenOptions;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use pathway::config::Config;
///
/// let config: Config = serde_yaml::from_str("charset: latin1\ndefault_mode: rb\n").unwrap();
/// assert_eq!(config.charset.as_deref(), Some("latin1"));
///
/// assert!(serde_yaml::from_str::<Config>("colour: blue\n").is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default charset for text streams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// Mode string used when a command supplies none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<String>,

    /// Initial working directory of the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,

    /// Output verbosity: quiet, normal or verbose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_mode: Option<String>,

    /// Default options applied beneath every open request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<OpenOptions>,
}

impl Config {
    /// The options record [`Files`](crate::fs::Files) should use as its
    /// defaults: the `open` table, with `charset` filling an unset charset.
    #[must_use]
    pub fn open_defaults(&self) -> OpenOptions {
        let mut options = self.open.clone().unwrap_or_default();
        if options.charset.is_none() {
            options.charset.clone_from(&self.charset);
        }
        options
    }

    /// The configured log level, if one is set and valid.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let yaml = "\
charset: utf-8
default_mode: r
working_dir: /srv
log_mode: verbose
open:
  binary: true
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.working_dir.as_deref(), Some("/srv"));
        assert_eq!(config.log_level(), Some(LogLevel::Verbose));
        assert_eq!(config.open.as_ref().unwrap().binary, Some(true));
    }

    #[test]
    fn test_unknown_open_key_rejected() {
        let err = serde_yaml::from_str::<Config>("open:\n  sparse: true\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_open_defaults_take_top_level_charset() {
        let config = Config {
            charset: Some("latin1".to_string()),
            ..Default::default()
        };
        assert_eq!(config.open_defaults().charset.as_deref(), Some("latin1"));

        let config = Config {
            charset: Some("latin1".to_string()),
            open: Some(OpenOptions {
                charset: Some("ascii".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(config.open_defaults().charset.as_deref(), Some("ascii"));
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
