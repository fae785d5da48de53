//! Bundle layout verification
//!
//! Orthogonal to subset validation: every classifier's staged root must carry
//! the manifest descriptor file, whatever its content. Offenders are collected
//! across all classifiers so one run reports every gap.

use crate::catalog::ClassifierRegistry;
use crate::error::{GeopackError, Result};
use crate::stage::StagedLayout;

/// Check that each classifier's staged root has a manifest descriptor.
///
/// The diagnostic names every offending classifier together with the path
/// that was expected.
pub fn verify_layout(registry: &ClassifierRegistry, layout: &StagedLayout) -> Result<()> {
    let mut missing = Vec::new();

    for classifier in registry.all() {
        let manifest = layout.manifest_path(classifier);
        if !manifest.is_file() {
            missing.push(format!("{} (expected {})", classifier, manifest.display()));
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GeopackError::LayoutIncomplete {
            details: missing.join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::MANIFEST_FILE;
    use tempfile::TempDir;

    fn registry(classifiers: &[&str]) -> ClassifierRegistry {
        ClassifierRegistry::new(classifiers.iter().map(|c| c.to_string()))
    }

    fn stage_manifest(root: &std::path::Path, classifier: &str) {
        let dir = root.join(classifier);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE), b"{}").unwrap();
    }

    #[test]
    fn test_all_manifests_present() {
        let temp = TempDir::new().unwrap();
        stage_manifest(temp.path(), "linux-x86_64");
        stage_manifest(temp.path(), "osx-aarch64");

        let layout = StagedLayout::new(temp.path());
        let result = verify_layout(&registry(&["linux-x86_64", "osx-aarch64"]), &layout);
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_manifest_names_classifier_and_path() {
        let temp = TempDir::new().unwrap();
        stage_manifest(temp.path(), "osx-aarch64");
        // linux-x86_64 staged but without a manifest
        std::fs::create_dir_all(temp.path().join("linux-x86_64")).unwrap();

        let layout = StagedLayout::new(temp.path());
        let err =
            verify_layout(&registry(&["linux-x86_64", "osx-aarch64"]), &layout).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("linux-x86_64"));
        assert!(msg.contains("manifest.json"));
        assert!(!msg.contains("osx-aarch64"));
    }

    #[test]
    fn test_manifest_must_be_regular_file() {
        let temp = TempDir::new().unwrap();
        // A directory named manifest.json does not count
        std::fs::create_dir_all(temp.path().join("linux-x86_64").join(MANIFEST_FILE)).unwrap();

        let layout = StagedLayout::new(temp.path());
        let err = verify_layout(&registry(&["linux-x86_64"]), &layout).unwrap_err();
        assert!(err.to_string().contains("linux-x86_64"));
    }

    #[test]
    fn test_all_offenders_collected() {
        let temp = TempDir::new().unwrap();
        let layout = StagedLayout::new(temp.path());
        let err = verify_layout(&registry(&["linux-x86_64", "windows-x86_64"]), &layout)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("linux-x86_64"));
        assert!(msg.contains("windows-x86_64"));
    }
}
