//! Package command implementation
//!
//! Fans the per-classifier assemble pipeline out over a rayon worker pool.
//! Classifiers read disjoint staged subtrees and write disjoint artifacts, so
//! they run without coordination; results are collected per classifier and
//! printed once all workers finish. One classifier's staging error does not
//! stop the others, but any failure makes the whole run exit non-zero.

use std::path::PathBuf;

use console::Style;
use rayon::prelude::*;

use crate::bundle::BundleAssembler;
use crate::catalog::{ClassifierRegistry, RequirementCatalog};
use crate::cli::PackageArgs;
use crate::config::{parse_toggle, PackConfig};
use crate::error::{GeopackError, Result};
use crate::stage::StagedLayout;

/// Outcome of one classifier's assemble pipeline
struct ClassifierOutcome {
    classifier: String,
    result: Result<Vec<PathBuf>>,
}

/// Run package command
pub fn run(config_path: Option<PathBuf>, args: PackageArgs) -> Result<()> {
    let mut config = PackConfig::load(config_path.as_deref())?;

    if let Some(raw) = &args.regional {
        config.regional.enabled = parse_toggle(raw)?;
    }
    if let Some(staging) = args.staging {
        config.staging_root = staging;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    config.validate()?;

    let registry = ClassifierRegistry::new(config.classifiers.clone());
    let catalog = RequirementCatalog::new(config.requirements.clone());
    let layout = StagedLayout::new(&config.staging_root);
    let assembler = BundleAssembler::new(
        layout,
        config.output_dir.clone(),
        config.bundle_name.clone(),
    );

    let outcomes: Vec<ClassifierOutcome> = registry
        .all()
        .par_iter()
        .map(|classifier| ClassifierOutcome {
            classifier: classifier.clone(),
            result: package_classifier(&assembler, classifier, &catalog, &config),
        })
        .collect();

    report(&outcomes);

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        return Err(GeopackError::PackagingFailed {
            failed,
            total: outcomes.len(),
        });
    }

    Ok(())
}

/// Assemble all enabled bundle variants for one classifier
fn package_classifier(
    assembler: &BundleAssembler,
    classifier: &str,
    catalog: &RequirementCatalog,
    config: &PackConfig,
) -> Result<Vec<PathBuf>> {
    let mut artifacts = vec![assembler.assemble_full(classifier)?];

    if config.regional.enabled {
        artifacts.push(assembler.assemble_reduced(
            classifier,
            catalog,
            &config.regional.suffix,
        )?);
    }

    Ok(artifacts)
}

/// Print one status line per classifier, successes first
fn report(outcomes: &[ClassifierOutcome]) {
    let ok = Style::new().green().bold();
    let fail = Style::new().red().bold();

    for outcome in outcomes {
        match &outcome.result {
            Ok(artifacts) => {
                println!("{} {}", ok.apply_to("✓"), outcome.classifier);
                for artifact in artifacts {
                    println!("    {}", artifact.display());
                }
            }
            Err(e) => {
                println!("{} {}: {}", fail.apply_to("✗"), outcome.classifier, e);
            }
        }
    }
}
