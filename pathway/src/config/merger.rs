//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;
use crate::open::OpenOptions;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathway::config::{Config, ConfigMerger};
///
/// let low = Config { charset: Some("latin1".to_string()), ..Default::default() };
/// let high = Config { charset: Some("ascii".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.charset.as_deref(), Some("ascii"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    ///
    /// The `open` table is merged flag by flag.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.charset.is_some() {
            target.charset.clone_from(&source.charset);
        }
        if source.default_mode.is_some() {
            target.default_mode.clone_from(&source.default_mode);
        }
        if source.working_dir.is_some() {
            target.working_dir.clone_from(&source.working_dir);
        }
        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if let Some(open) = &source.open {
            let base = target.open.take().unwrap_or_default();
            target.open = Some(Self::merge_open(base, open));
        }
    }

    fn merge_open(target: OpenOptions, source: &OpenOptions) -> OpenOptions {
        source.clone().or(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_none_does_not_overwrite() {
        let mut target = Config {
            default_mode: Some("r".to_string()),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.default_mode.as_deref(), Some("r"));
    }

    #[test]
    fn test_open_merged_per_flag() {
        let low = Config {
            open: Some(OpenOptions {
                binary: Some(true),
                exclusive: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let high = Config {
            open: Some(OpenOptions {
                binary: Some(false),
                charset: Some("ascii".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        let open = merged.open.unwrap();
        assert_eq!(open.binary, Some(false));
        assert_eq!(open.exclusive, Some(true));
        assert_eq!(open.charset.as_deref(), Some("ascii"));
    }

    #[test]
    fn test_later_sources_win() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    log_mode: Some("quiet".to_string()),
                    working_dir: Some("/home".to_string()),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    log_mode: Some("verbose".to_string()),
                    ..Default::default()
                },
            ),
        ]);
        assert_eq!(merged.log_mode.as_deref(), Some("verbose"));
        assert_eq!(merged.working_dir.as_deref(), Some("/home"));
    }
}
