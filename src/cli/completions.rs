//! Completions command arguments

use clap::Args;

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
