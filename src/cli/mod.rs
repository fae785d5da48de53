//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - package: Package command arguments
//! - verify: Verify command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod package;
pub mod verify;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use package::PackageArgs;
pub use verify::VerifyArgs;

/// geopack - native bundle packager
///
/// Packages platform-specific native library bundles for a geospatial toolkit
/// and validates that each bundle is complete before it ships.
#[derive(Parser, Debug)]
#[command(
    name = "geopack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Packages per-platform native library bundles for a geospatial toolkit",
    long_about = "geopack assembles one archive per platform classifier from a staged \
                  native-resource tree, optionally derives a reduced regional archive by \
                  filtering the reference data down to a named allowlist, and verifies that \
                  every required data group is present before anything is published.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  geopack package                        \x1b[90m# Assemble all bundle variants\x1b[0m\n   \
                  geopack package --regional false       \x1b[90m# Full bundles only\x1b[0m\n   \
                  geopack verify                         \x1b[90m# Check manifest descriptors\x1b[0m\n   \
                  geopack list --json                    \x1b[90m# Dump classifiers and catalog\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to geopack.yaml in the working directory)
    #[arg(long, short = 'c', global = true, env = "GEOPACK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble per-classifier bundle archives
    Package(PackageArgs),

    /// Verify the staged bundle layout (manifest descriptors)
    Verify(VerifyArgs),

    /// List configured classifiers and data requirements
    List(ListArgs),

    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_package_with_overrides() {
        let cli = Cli::try_parse_from([
            "geopack",
            "package",
            "--regional",
            "false",
            "--output",
            "out",
        ])
        .unwrap();
        match cli.command {
            Commands::Package(args) => {
                assert_eq!(args.regional.as_deref(), Some("false"));
                assert_eq!(args.output, Some(PathBuf::from("out")));
            }
            _ => panic!("expected package command"),
        }
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["geopack", "--config", "custom.yaml", "verify"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }
}
