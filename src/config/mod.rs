//! Configuration file handling for geopack
//!
//! The packaging run is driven by `geopack.yaml`:
//!
//! ```yaml
//! bundle_name: gdal-natives
//! staging_root: staging/native
//! output_dir: dist
//! regional:
//!   enabled: true
//!   suffix: swiss
//! classifiers:
//!   - linux-x86_64
//! requirements:
//!   - label: proj.db
//!     candidates: [proj.db]
//! ```
//!
//! All values are fixed at load time; there is no runtime mutation. When no
//! config file is present, built-in defaults apply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::registry::default_classifiers;
use crate::catalog::requirement::default_requirements;
use crate::catalog::{Requirement, RequirementCatalog};
use crate::error::{GeopackError, Result};

/// Default configuration filename, looked up in the working directory
pub const CONFIG_FILE: &str = "geopack.yaml";

/// Top-level packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    /// Base name for output artifacts
    #[serde(default = "default_bundle_name")]
    pub bundle_name: String,

    /// Root of the staged resource tree (one subtree per classifier)
    #[serde(default = "default_staging_root")]
    pub staging_root: PathBuf,

    /// Directory receiving the output archives
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Reduced regional bundle settings
    #[serde(default)]
    pub regional: RegionalConfig,

    /// Supported platform classifiers
    #[serde(default = "default_classifiers")]
    pub classifiers: Vec<String>,

    /// Requirement catalog for the regional data subset
    #[serde(default = "default_requirements")]
    pub requirements: Vec<Requirement>,
}

/// Settings for the reduced regional bundle variant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionalConfig {
    /// Whether reduced bundles are produced at all.
    /// Accepts only true/false (bool or string, case-insensitive).
    #[serde(default = "default_true", deserialize_with = "strict_toggle")]
    pub enabled: bool,

    /// Regional marker inserted into the reduced artifact name
    #[serde(default = "default_regional_suffix")]
    pub suffix: String,
}

impl Default for RegionalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suffix: default_regional_suffix(),
        }
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            bundle_name: default_bundle_name(),
            staging_root: default_staging_root(),
            output_dir: default_output_dir(),
            regional: RegionalConfig::default(),
            classifiers: default_classifiers(),
            requirements: default_requirements(),
        }
    }
}

fn default_bundle_name() -> String {
    "gdal-natives".to_string()
}

fn default_staging_root() -> PathBuf {
    PathBuf::from("staging/native")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_regional_suffix() -> String {
    "swiss".to_string()
}

fn default_true() -> bool {
    true
}

/// Parse a toggle value with a strict true/false vocabulary.
///
/// Matching is case-insensitive ("True" and "FALSE" are fine); anything else
/// is a configuration error, never silently coerced.
pub fn parse_toggle(raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(GeopackError::InvalidToggle {
            value: raw.to_string(),
        }),
    }
}

/// Serde adapter applying the strict toggle vocabulary to YAML scalars
fn strict_toggle<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match value {
        serde_yaml::Value::Bool(b) => Ok(b),
        serde_yaml::Value::String(s) => parse_toggle(&s).map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "Invalid value for regional toggle: '{:?}' (expected true or false)",
            other
        ))),
    }
}

impl PackConfig {
    /// Load configuration from an explicit path, the default `geopack.yaml`
    /// in the working directory, or built-in defaults when neither exists.
    ///
    /// An explicitly passed path must exist; a missing default file is not
    /// an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    let config = Self::default();
                    config.validate()?;
                    return Ok(config);
                }
                default
            }
        };

        let raw =
            std::fs::read_to_string(&path).map_err(|e| GeopackError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let config: Self =
            serde_yaml::from_str(&raw).map_err(|e| GeopackError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| GeopackError::ConfigParseFailed {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that can never package anything.
    ///
    /// Runs before any filesystem I/O so a malformed catalog aborts the whole
    /// run up front.
    pub fn validate(&self) -> Result<()> {
        if self.classifiers.is_empty() {
            return Err(GeopackError::NoClassifiers);
        }
        RequirementCatalog::new(self.requirements.clone()).validate()
    }
}
