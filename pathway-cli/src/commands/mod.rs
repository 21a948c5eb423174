//! CLI command implementations.
//!
//! - `resolve`, `join`, `normal`: fold fragments into one path
//! - `split`, `basename`, `dirname`, `extension`: take a path apart
//! - `absolute`, `relative`, `canonical`: place a path against the working directory
//! - `mode`: show how a mode string and options resolve
//! - `cat`, `write`, `ls`, `mkdir`, `mv`, `cp`, `rm`, `stat`: file operations
//! - `completions`: shell completion scripts

pub mod absolute;
pub mod cat;
pub mod completions;
pub mod components;
pub mod ls;
pub mod mkdir;
pub mod mode;
pub mod resolve;
pub mod rm;
pub mod stat;
pub mod transfer;
pub mod write;

pub use absolute::{AbsoluteCommand, CanonicalCommand, RelativeCommand};
pub use cat::CatCommand;
pub use completions::CompletionsCommand;
pub use components::{BasenameCommand, DirnameCommand, ExtensionCommand, SplitCommand};
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mode::ModeCommand;
pub use resolve::{JoinCommand, NormalCommand, ResolveCommand};
pub use rm::RmCommand;
pub use stat::StatCommand;
pub use transfer::{CpCommand, MvCommand};
pub use write::WriteCommand;
