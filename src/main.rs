//! geopack - native bundle packager
//!
//! Assembles platform-specific native library bundles (binaries plus
//! reference data) into per-classifier archives, derives an optional reduced
//! regional archive, and validates the staged tree before anything ships.

use clap::Parser;

mod bundle;
mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod stage;
mod validate;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Package(args) => commands::package::run(cli.config, args),
        Commands::Verify(args) => commands::verify::run(cli.config, args),
        Commands::List(args) => commands::list::run(cli.config, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
