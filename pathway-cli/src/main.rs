//! Main entry point for the pathway CLI.
//!
//! The command-line front end for the pathway library:
//! - path algebra (`resolve`, `join`, `normal`, `split`, `basename`, ...)
//! - open-mode negotiation (`mode`)
//! - file operations (`cat`, `write`, `ls`, `mkdir`, `mv`, `cp`, `rm`, `stat`)

use clap::Parser;
use pathway::init_logger_with;
use pathway_cli::cli::{Cli, Command};
use pathway_cli::utils::{configured_log_level, GlobalOptions};

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        cwd: cli.cwd,
    };

    // Route library log records to stderr: flags, then PATHWAY_LOG_MODE,
    // then the configured log_mode
    let configured = configured_log_level(&global);
    init_logger_with(global.verbose, global.quiet, configured).install();

    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Normal(cmd) => cmd.execute(&global),
        Command::Split(cmd) => cmd.execute(&global),
        Command::Basename(cmd) => cmd.execute(&global),
        Command::Dirname(cmd) => cmd.execute(&global),
        Command::Extension(cmd) => cmd.execute(&global),
        Command::Absolute(cmd) => cmd.execute(&global),
        Command::Relative(cmd) => cmd.execute(&global),
        Command::Canonical(cmd) => cmd.execute(&global),
        Command::Mode(cmd) => cmd.execute(&global),
        Command::Cat(cmd) => cmd.execute(&global),
        Command::Write(cmd) => cmd.execute(&global),
        Command::Ls(cmd) => cmd.execute(&global),
        Command::Mkdir(cmd) => cmd.execute(&global),
        Command::Mv(cmd) => cmd.execute(&global),
        Command::Cp(cmd) => cmd.execute(&global),
        Command::Rm(cmd) => cmd.execute(&global),
        Command::Stat(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
