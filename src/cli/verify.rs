//! Verify command arguments

use clap::Args;
use std::path::PathBuf;

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Override the staging root from the configuration
    #[arg(long, value_name = "DIR")]
    pub staging: Option<PathBuf>,
}
