//! Package command arguments

use clap::Args;
use std::path::PathBuf;

/// Arguments for the package command
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Override the regional bundle toggle (strictly 'true' or 'false')
    #[arg(long, value_name = "BOOL", env = "GEOPACK_REGIONAL")]
    pub regional: Option<String>,

    /// Override the staging root from the configuration
    #[arg(long, value_name = "DIR")]
    pub staging: Option<PathBuf>,

    /// Override the output directory from the configuration
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,
}
