//! Configuration system for pathway.
//!
//! # Configuration Precedence
//!
//! Sources are merged from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. User config (`~/.pathway/config.yaml`)
//! 3. Project config (the nearest `pathway.yaml` at or above the working
//!    directory)
//! 4. Environment variables (`PATHWAY_*`)
//! 5. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! # Examples
//!
//! ```no_run
//! use pathway::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("default charset: {:?}", config.charset);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
