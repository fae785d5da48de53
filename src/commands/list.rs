//! List command implementation
//!
//! Shows the configured classifier registry and requirement catalog, either
//! as a human listing or as JSON for tooling.

use std::path::PathBuf;

use console::Style;
use serde_json::json;

use crate::catalog::{ClassifierRegistry, RequirementCatalog};
use crate::cli::ListArgs;
use crate::config::PackConfig;
use crate::error::Result;

/// Run list command
pub fn run(config_path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let config = PackConfig::load(config_path.as_deref())?;
    let registry = ClassifierRegistry::new(config.classifiers.clone());
    let catalog = RequirementCatalog::new(config.requirements.clone());

    if args.json {
        let payload = json!({
            "bundle_name": config.bundle_name,
            "regional": {
                "enabled": config.regional.enabled,
                "suffix": config.regional.suffix,
            },
            "classifiers": registry.all(),
            "requirements": catalog.all(),
            "allowlist": catalog.allowlist(),
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| crate::error::GeopackError::IoError {
                message: e.to_string(),
            })?;
        println!("{}", rendered);
        return Ok(());
    }

    let header = Style::new().green().bold();

    println!("{} ({}):", header.apply_to("Classifiers"), registry.len());
    for classifier in registry.all() {
        println!("  {}", classifier);
    }

    println!();
    println!(
        "{} ({}):",
        header.apply_to("Data requirements"),
        catalog.all().len()
    );
    for requirement in catalog.all() {
        println!("  {} [{}]", requirement.label, requirement.candidates.join(" | "));
    }

    println!();
    let state = if config.regional.enabled {
        format!("enabled (suffix '{}')", config.regional.suffix)
    } else {
        "disabled".to_string()
    };
    println!("Regional bundles: {}", state);

    Ok(())
}
