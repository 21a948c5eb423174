//! Build script for pathway-cli.
//!
//! Generates the `pathway.1` man page into `OUT_DIR/man` with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! outline is declared here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Command outline for the man page. Keep in step with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathway")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths and negotiate file open modes")
        .long_about(
            "Command-line front end for path algebra, open-mode negotiation and file operations",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Working directory relative paths are resolved against")
                .value_name("PATH")
                .global(true)
                .env("PATHWAY_WORKING_DIR"),
        )
        .subcommands([
            Command::new("resolve").about("Resolve path fragments left to right"),
            Command::new("join").about("Join path fragments and normalize"),
            Command::new("normal").about("Print the normal form of a path"),
            Command::new("split").about("Print the segments of a path"),
            Command::new("basename").about("Print the last segment of a path"),
            Command::new("dirname").about("Print the parent directory of a path"),
            Command::new("extension").about("Print the extension of a path"),
            Command::new("absolute").about("Make a path absolute against the working directory"),
            Command::new("relative").about("Print the path from one location to another"),
            Command::new("canonical").about("Print the canonical path, with links followed"),
            Command::new("mode")
                .about("Show how a mode string and options resolve")
                .long_about(
                    "Resolve a mode string (r, w, a, +, b, x, c) and key=value options into an open intent",
                ),
            Command::new("cat").about("Print the content of a file"),
            Command::new("write").about("Write text to a file"),
            Command::new("ls").about("List a directory"),
            Command::new("mkdir").about("Create a directory"),
            Command::new("mv").about("Move or rename a path"),
            Command::new("cp").about("Copy a file"),
            Command::new("rm").about("Remove a file or directory"),
            Command::new("stat").about("Show metadata for a path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("create man page directory");

    let mut buffer = Vec::new();
    Man::new(build_cli())
        .render(&mut buffer)
        .expect("render man page");
    fs::write(man_dir.join("pathway.1"), buffer).expect("write man page");

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
