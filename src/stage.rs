//! Staged resource tree layout
//!
//! The staging tree is externally prepared input, one subtree per classifier:
//!
//! ```text
//! <staging_root>/
//!   linux-x86_64/
//!     manifest.json        <- manifest descriptor, presence checked by verify
//!     lib/...              <- native binaries
//!     share/proj/...       <- reference datasets
//!   osx-aarch64/
//!     ...
//! ```
//!
//! geopack never mutates this tree; it only reads it when composing archives
//! and listing reference-data filenames.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Manifest descriptor filename, required in every classifier root
pub const MANIFEST_FILE: &str = "manifest.json";

/// Reference-data subdirectory relative to a classifier root
pub const DATA_SUBDIR: &str = "share/proj";

/// Fixed namespace prefix embedded in every archive, ahead of the classifier
pub const ARCHIVE_NAMESPACE: &str = "native";

/// Path view over the staged resource tree
#[derive(Debug, Clone)]
pub struct StagedLayout {
    root: PathBuf,
}

impl StagedLayout {
    /// Create a layout rooted at the given staging directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Staged root for one classifier
    pub fn classifier_root(&self, classifier: &str) -> PathBuf {
        self.root.join(classifier)
    }

    /// Expected manifest descriptor path for one classifier
    pub fn manifest_path(&self, classifier: &str) -> PathBuf {
        self.classifier_root(classifier).join(MANIFEST_FILE)
    }

    /// Reference-data directory for one classifier
    pub fn data_dir(&self, classifier: &str) -> PathBuf {
        self.classifier_root(classifier).join(DATA_SUBDIR)
    }
}

/// Shallow listing of regular files in a staged data directory.
///
/// Subdirectories and hidden files (leading dot) are excluded. A missing
/// directory yields an empty set, the same as a present-but-empty one; the
/// caller decides what emptiness means.
pub fn list_data_files(dir: &Path) -> Result<BTreeSet<String>> {
    let mut files = BTreeSet::new();
    if !dir.is_dir() {
        return Ok(files);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        files.insert(name);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_paths() {
        let layout = StagedLayout::new("staging/native");
        assert_eq!(
            layout.manifest_path("linux-x86_64"),
            PathBuf::from("staging/native/linux-x86_64/manifest.json")
        );
        assert_eq!(
            layout.data_dir("osx-aarch64"),
            PathBuf::from("staging/native/osx-aarch64/share/proj")
        );
    }

    #[test]
    fn test_list_data_files_shallow_and_visible_only() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("proj.db"), b"db").unwrap();
        std::fs::write(temp.path().join(".DS_Store"), b"junk").unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("nested/inner.tif"), b"grid").unwrap();

        let files = list_data_files(temp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.contains("proj.db"));
    }

    #[test]
    fn test_list_data_files_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = list_data_files(&temp.path().join("does-not-exist")).unwrap();
        assert!(files.is_empty());
    }
}
