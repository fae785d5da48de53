//! Reference-data subset validation
//!
//! Checks the *staged* data directory (the source of truth, not the filtered
//! archive output) so missing files are caught before any filtering happens
//! and the diagnostic can list everything at once.

use std::path::Path;

use crate::catalog::{Requirement, RequirementCatalog};
use crate::error::{GeopackError, Result};
use crate::stage::{self, DATA_SUBDIR};

/// Validate that every requirement group is satisfiable from the staged
/// reference-data directory.
///
/// Policy:
/// - An empty (or absent) directory passes vacuously. Some staging fixtures
///   ship no reference data at all; that is tolerated, only a populated but
///   incomplete directory is an error.
/// - Misses are collected across the whole catalog, never reported one at a
///   time. The diagnostic names the classifier, every missing group with its
///   full candidate list, and the sorted listing of files actually found.
pub fn validate_subset(
    classifier: &str,
    data_dir: &Path,
    catalog: &RequirementCatalog,
) -> Result<()> {
    let staged = stage::list_data_files(data_dir)?;
    if staged.is_empty() {
        return Ok(());
    }

    let missing: Vec<&Requirement> = catalog
        .all()
        .iter()
        .filter(|requirement| !requirement.is_satisfied_by(&staged))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let missing_groups = missing
        .iter()
        .map(|requirement| format!("{} [{}]", requirement.label, requirement.candidates.join(" | ")))
        .collect::<Vec<_>>()
        .join(", ");

    // BTreeSet iteration is already sorted
    let available = staged.into_iter().collect::<Vec<_>>().join(", ");

    Err(GeopackError::SubsetIncomplete {
        classifier: classifier.to_string(),
        data_dir: DATA_SUBDIR.to_string(),
        missing: missing_groups,
        available,
    })
}
