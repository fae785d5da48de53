//! Verify command implementation
//!
//! Runs the layout verifier: every classifier's staged root must carry its
//! manifest descriptor. Independent of the package command and of the
//! regional toggle.

use std::path::PathBuf;

use crate::catalog::ClassifierRegistry;
use crate::cli::VerifyArgs;
use crate::config::PackConfig;
use crate::error::Result;
use crate::stage::StagedLayout;
use crate::validate::verify_layout;

/// Run verify command
pub fn run(config_path: Option<PathBuf>, args: VerifyArgs) -> Result<()> {
    let mut config = PackConfig::load(config_path.as_deref())?;
    if let Some(staging) = args.staging {
        config.staging_root = staging;
    }

    let registry = ClassifierRegistry::new(config.classifiers.clone());
    let layout = StagedLayout::new(&config.staging_root);

    verify_layout(&registry, &layout)?;

    println!(
        "Bundle layout OK: {} classifiers carry {}",
        registry.len(),
        crate::stage::MANIFEST_FILE
    );
    Ok(())
}
