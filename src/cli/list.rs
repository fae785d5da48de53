//! List command arguments

use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON instead of the human listing
    #[arg(long)]
    pub json: bool,
}
