//! Per-classifier bundle assembly
//!
//! The assembler composes archives straight from the staged resource tree.
//! Filtering for the reduced variant happens at composition time rather than
//! through an intermediate copy, so both variants always derive from the same
//! canonical staging.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::bundle::archive::ArchiveWriter;
use crate::catalog::RequirementCatalog;
use crate::error::{GeopackError, Result};
use crate::stage::{StagedLayout, ARCHIVE_NAMESPACE, DATA_SUBDIR};
use crate::validate::validate_subset;

/// Composes full and reduced bundles for single classifiers
#[derive(Debug, Clone)]
pub struct BundleAssembler {
    layout: StagedLayout,
    output_dir: PathBuf,
    bundle_name: String,
}

impl BundleAssembler {
    /// Create an assembler writing archives into `output_dir`
    pub fn new(
        layout: StagedLayout,
        output_dir: impl Into<PathBuf>,
        bundle_name: impl Into<String>,
    ) -> Self {
        Self {
            layout,
            output_dir: output_dir.into(),
            bundle_name: bundle_name.into(),
        }
    }

    /// Archive filename for the full bundle variant
    pub fn full_archive_name(&self, classifier: &str) -> String {
        format!("{}-{}.tar.gz", self.bundle_name, classifier)
    }

    /// Archive filename for the reduced regional variant
    pub fn reduced_archive_name(&self, classifier: &str, suffix: &str) -> String {
        format!("{}-{}-{}.tar.gz", self.bundle_name, suffix, classifier)
    }

    /// Assemble the full bundle: the entire staged subtree, no filtering.
    ///
    /// Returns the path of the written archive.
    pub fn assemble_full(&self, classifier: &str) -> Result<PathBuf> {
        let entries = self.collect_entries(classifier, |_, _| true)?;
        self.write_archive(&self.full_archive_name(classifier), entries)
    }

    /// Assemble the reduced regional bundle.
    ///
    /// The staged reference-data directory is validated against the catalog
    /// first; on failure no archive bytes are written at all. Everything
    /// outside the data directory is carried unfiltered. Inside it, only
    /// files directly in the directory whose names are on the allowlist are
    /// kept; data subdirectories are dropped.
    pub fn assemble_reduced(
        &self,
        classifier: &str,
        catalog: &RequirementCatalog,
        suffix: &str,
    ) -> Result<PathBuf> {
        validate_subset(classifier, &self.layout.data_dir(classifier), catalog)?;

        let allowlist: BTreeSet<String> = catalog.allowlist().into_iter().collect();
        let data_subdir = Path::new(DATA_SUBDIR);

        let entries = self.collect_entries(classifier, |rel, name| {
            if rel.starts_with(data_subdir) {
                rel.parent() == Some(data_subdir) && allowlist.contains(name)
            } else {
                true
            }
        })?;

        self.write_archive(&self.reduced_archive_name(classifier, suffix), entries)
    }

    /// Walk the classifier's staged root in sorted order, returning
    /// `(archive entry path, source path)` pairs for files passing `keep`.
    ///
    /// `keep` receives the path relative to the classifier root and the bare
    /// filename.
    fn collect_entries(
        &self,
        classifier: &str,
        keep: impl Fn(&Path, &str) -> bool,
    ) -> Result<Vec<(String, PathBuf)>> {
        let root = self.layout.classifier_root(classifier);
        if !root.is_dir() {
            return Err(GeopackError::StagingMissing {
                classifier: classifier.to_string(),
                path: root.display().to_string(),
            });
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|e| GeopackError::StagingReadFailed {
                path: root.display().to_string(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(&root) else {
                continue;
            };
            let name = entry.file_name().to_string_lossy();
            if !keep(rel, &name) {
                continue;
            }

            entries.push((
                archive_entry_path(classifier, rel),
                entry.path().to_path_buf(),
            ));
        }

        Ok(entries)
    }

    /// Write entries into a fresh archive, atomically.
    ///
    /// The archive is composed in a tempfile next to the final location and
    /// persisted only after the tar and gzip streams finalize cleanly, so a
    /// failed run never leaves a truncated artifact behind.
    fn write_archive(
        &self,
        archive_name: &str,
        entries: Vec<(String, PathBuf)>,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let temp = NamedTempFile::new_in(&self.output_dir)?;
        let mut writer = ArchiveWriter::new(temp.as_file());
        for (entry_path, source) in entries {
            writer.append_file(&entry_path, &source)?;
        }
        writer.finish(archive_name)?;

        let target = self.output_dir.join(archive_name);
        temp.persist(&target)
            .map_err(|e| GeopackError::ArchiveFinalizeFailed {
                path: target.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(target)
    }
}

/// Archive-internal path for a staged file: `native/<classifier>/<rel>`,
/// always forward-slash separated.
fn archive_entry_path(classifier: &str, rel: &Path) -> String {
    let rel_slash = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}/{}", ARCHIVE_NAMESPACE, classifier, rel_slash)
}
