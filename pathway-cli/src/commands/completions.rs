//! Shell completion generation command.

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Name of the installed binary.
const BIN_NAME: &str = "pathway";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("#   pathway completions bash > ~/.local/share/bash-completion/completions/pathway");
                }
                Shell::Zsh => {
                    eprintln!("#   pathway completions zsh > ~/.zsh/completions/_pathway");
                }
                Shell::Fish => {
                    eprintln!("#   pathway completions fish > ~/.config/fish/completions/pathway.fish");
                }
                Shell::PowerShell => {
                    eprintln!("#   pathway completions powershell > $PROFILE");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
