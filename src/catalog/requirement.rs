//! Requirement catalog for reference-data validation
//!
//! A requirement is a logical data dependency satisfiable by any one of
//! several acceptable filenames. Candidates are aliases for the same dataset
//! under different naming conventions (legacy `.gsb`/`.gtx` grid names vs.
//! modern `.tif` names), so a requirement is met as soon as any candidate is
//! staged. The catalog is global: the same requirements apply to every
//! classifier's staged data.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{GeopackError, Result};

/// A named logical data dependency with its acceptable filenames
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    /// Human-readable label for diagnostics (e.g. "CHENyx06a")
    pub label: String,

    /// Acceptable filenames, any one of which satisfies the requirement.
    /// Order is for diagnostic readability only; matching is existential.
    pub candidates: Vec<String>,
}

impl Requirement {
    /// Create a new requirement
    pub fn new(label: impl Into<String>, candidates: &[&str]) -> Self {
        Self {
            label: label.into(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Whether any candidate is present in the staged file set
    pub fn is_satisfied_by(&self, staged: &BTreeSet<String>) -> bool {
        self.candidates.iter().any(|c| staged.contains(c))
    }
}

/// Ordered list of requirements, declared once per configuration
#[derive(Debug, Clone)]
pub struct RequirementCatalog {
    requirements: Vec<Requirement>,
}

impl RequirementCatalog {
    /// Create a catalog from a requirement list
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self { requirements }
    }

    /// All requirements, in declaration order
    pub fn all(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Flattened, order-preserving de-duplicated union of all candidates.
    ///
    /// This is the filter used to decide which reference-data files a reduced
    /// bundle retains. A candidate shared by two requirements appears once
    /// here; staging that one file satisfies both requirements.
    pub fn allowlist(&self) -> Vec<String> {
        let mut allowlist: Vec<String> = Vec::new();
        for requirement in &self.requirements {
            for candidate in &requirement.candidates {
                if !allowlist.contains(candidate) {
                    allowlist.push(candidate.clone());
                }
            }
        }
        allowlist
    }

    /// Reject catalogs that can never be satisfied
    pub fn validate(&self) -> Result<()> {
        for requirement in &self.requirements {
            if requirement.candidates.is_empty() {
                return Err(GeopackError::EmptyCandidates {
                    label: requirement.label.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Default requirement catalog: the Swiss PROJ data groups
pub fn default_requirements() -> Vec<Requirement> {
    vec![
        Requirement::new("proj.db", &["proj.db"]),
        Requirement::new("CHENyx06a", &["CHENyx06a.gsb", "ch_swisstopo_CHENyx06a.tif"]),
        Requirement::new(
            "CHENyx06_ETRS",
            &["CHENyx06_ETRS.gsb", "ch_swisstopo_CHENyx06_ETRS.tif"],
        ),
        Requirement::new("egm96_15", &["egm96_15.gtx", "us_nga_egm96_15.tif"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_satisfied_by_any_candidate() {
        let requirement = Requirement::new("egm96_15", &["egm96_15.gtx", "us_nga_egm96_15.tif"]);
        assert!(requirement.is_satisfied_by(&staged(&["egm96_15.gtx"])));
        assert!(requirement.is_satisfied_by(&staged(&["us_nga_egm96_15.tif"])));
        assert!(!requirement.is_satisfied_by(&staged(&["proj.db"])));
    }

    #[test]
    fn test_allowlist_flattens_in_order() {
        let catalog = RequirementCatalog::new(default_requirements());
        let allowlist = catalog.allowlist();
        assert_eq!(allowlist[0], "proj.db");
        assert_eq!(allowlist[1], "CHENyx06a.gsb");
        assert_eq!(allowlist.len(), 7);
    }

    #[test]
    fn test_allowlist_deduplicates_shared_candidates() {
        // Two requirements sharing a candidate: the allowlist carries the
        // name once, and one staged file resolves both.
        let catalog = RequirementCatalog::new(vec![
            Requirement::new("grid-legacy", &["shared.gsb", "a.tif"]),
            Requirement::new("grid-modern", &["shared.gsb", "b.tif"]),
        ]);
        let allowlist = catalog.allowlist();
        assert_eq!(allowlist, vec!["shared.gsb", "a.tif", "b.tif"]);

        let files = staged(&["shared.gsb"]);
        assert!(catalog.all().iter().all(|r| r.is_satisfied_by(&files)));
    }

    #[test]
    fn test_validate_rejects_empty_candidates() {
        let catalog = RequirementCatalog::new(vec![Requirement {
            label: "broken".to_string(),
            candidates: Vec::new(),
        }]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = RequirementCatalog::new(default_requirements());
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.all().len(), 4);
    }
}
