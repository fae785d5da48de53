//! Common test utilities for geopack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A disposable project directory with a staged resource tree
#[allow(dead_code)]
pub struct TestStaging {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStaging {
    /// Create a new staging fixture
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, rel: &str, content: &[u8]) {
        let file_path = self.path.join(rel);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a geopack.yaml with two classifiers and a two-group catalog
    pub fn write_default_config(&self) {
        self.write_file(
            "geopack.yaml",
            br#"bundle_name: test-natives
staging_root: staging
output_dir: dist
regional:
  enabled: true
  suffix: swiss
classifiers: [linux-x86_64, osx-aarch64]
requirements:
  - label: proj.db
    candidates: [proj.db]
  - label: geoid
    candidates: [egm96_15.gtx, us_nga_egm96_15.tif]
"#,
        );
    }

    /// Stage a file under one classifier's root
    pub fn stage(&self, classifier: &str, rel: &str, content: &[u8]) {
        self.write_file(&format!("staging/{}/{}", classifier, rel), content);
    }

    /// Stage a classifier whose reference data satisfies the default config
    pub fn stage_complete(&self, classifier: &str) {
        self.stage(classifier, "manifest.json", b"{}");
        self.stage(classifier, "lib/libgdal.so", b"elf");
        self.stage(classifier, "share/proj/proj.db", b"db");
        self.stage(classifier, "share/proj/us_nga_egm96_15.tif", b"geoid");
        self.stage(classifier, "share/proj/extra_grid.tif", b"extra");
    }

    /// Check if a file exists relative to the project root
    pub fn file_exists(&self, rel: &str) -> bool {
        self.path.join(rel).exists()
    }

    /// Entry paths of a produced archive, relative to the project root
    pub fn archive_entries(&self, rel: &str) -> Vec<String> {
        let file = std::fs::File::open(self.path.join(rel)).expect("Failed to open archive");
        let decoder = flate2::read::GzDecoder::new(file);
        let mut archive = tar::Archive::new(decoder);
        archive
            .entries()
            .expect("Failed to read archive entries")
            .map(|e| {
                e.expect("Failed to read entry")
                    .path()
                    .expect("Entry has invalid path")
                    .to_str()
                    .expect("Entry path is not UTF-8")
                    .to_string()
            })
            .collect()
    }
}
