//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AbsoluteCommand, BasenameCommand, CanonicalCommand, CatCommand, CompletionsCommand,
    CpCommand, DirnameCommand, ExtensionCommand, JoinCommand, LsCommand, MkdirCommand,
    ModeCommand, MvCommand, NormalCommand, RelativeCommand, ResolveCommand, RmCommand,
    SplitCommand, StatCommand, WriteCommand,
};

/// Resolve paths, negotiate open modes and operate on files.
#[derive(Parser)]
#[command(name = "pathway")]
#[command(version, about = "Resolve paths and negotiate file open modes", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Working directory relative paths are resolved against
    #[arg(long, value_name = "PATH", global = true, env = "PATHWAY_WORKING_DIR")]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve path fragments left to right
    Resolve(ResolveCommand),

    /// Join path fragments and normalize
    Join(JoinCommand),

    /// Print the normal form of a path
    Normal(NormalCommand),

    /// Print the segments of a path
    Split(SplitCommand),

    /// Print the last segment of a path
    Basename(BasenameCommand),

    /// Print the parent directory of a path
    Dirname(DirnameCommand),

    /// Print the extension of a path
    Extension(ExtensionCommand),

    /// Make a path absolute against the working directory
    Absolute(AbsoluteCommand),

    /// Print the path from one location to another
    Relative(RelativeCommand),

    /// Print the canonical path, with links followed
    Canonical(CanonicalCommand),

    /// Show how a mode string and options resolve
    Mode(ModeCommand),

    /// Print the content of a file
    Cat(CatCommand),

    /// Write text to a file
    Write(WriteCommand),

    /// List a directory
    Ls(LsCommand),

    /// Create a directory
    Mkdir(MkdirCommand),

    /// Move or rename a path
    Mv(MvCommand),

    /// Copy a file
    Cp(CpCommand),

    /// Remove a file or directory
    Rm(RmCommand),

    /// Show metadata for a path
    Stat(StatCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
