//! Error types and handling for geopack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for geopack operations
#[derive(Error, Diagnostic, Debug)]
pub enum GeopackError {
    // Configuration errors
    #[error("Invalid value for regional toggle: '{value}' (expected true or false)")]
    #[diagnostic(
        code(geopack::config::invalid_toggle),
        help("The regional toggle accepts only 'true' or 'false'")
    )]
    InvalidToggle { value: String },

    #[error("Requirement '{label}' has an empty candidate list")]
    #[diagnostic(
        code(geopack::config::empty_candidates),
        help("Every requirement must name at least one acceptable filename")
    )]
    EmptyCandidates { label: String },

    #[error("Configuration declares no classifiers")]
    #[diagnostic(
        code(geopack::config::no_classifiers),
        help("List at least one platform classifier, e.g. linux-x86_64")
    )]
    NoClassifiers,

    #[error("Failed to read configuration '{path}': {reason}")]
    #[diagnostic(code(geopack::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration '{path}': {reason}")]
    #[diagnostic(code(geopack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Staging and validation errors
    #[error(
        "Regional data subset for classifier '{classifier}' is incomplete. \
         Missing groups: {missing}. Available files in {data_dir}: {available}"
    )]
    #[diagnostic(
        code(geopack::validate::subset_incomplete),
        help("Stage one candidate file per missing group, or empty the data directory entirely")
    )]
    SubsetIncomplete {
        classifier: String,
        data_dir: String,
        missing: String,
        available: String,
    },

    #[error("Missing manifest descriptor for: {details}")]
    #[diagnostic(
        code(geopack::verify::layout_incomplete),
        help("Each classifier's staged root must carry a manifest.json file")
    )]
    LayoutIncomplete { details: String },

    #[error("Staged root not found for classifier '{classifier}': {path}")]
    #[diagnostic(code(geopack::bundle::staging_missing))]
    StagingMissing { classifier: String, path: String },

    #[error("Failed to read staged tree at '{path}': {reason}")]
    #[diagnostic(code(geopack::bundle::staging_read_failed))]
    StagingReadFailed { path: String, reason: String },

    // Archive errors
    #[error("Failed to write archive entry '{entry}': {reason}")]
    #[diagnostic(code(geopack::bundle::archive_write_failed))]
    ArchiveWriteFailed { entry: String, reason: String },

    #[error("Failed to finalize archive '{path}': {reason}")]
    #[diagnostic(code(geopack::bundle::archive_finalize_failed))]
    ArchiveFinalizeFailed { path: String, reason: String },

    #[error("Packaging failed for {failed} of {total} classifiers")]
    #[diagnostic(
        code(geopack::bundle::packaging_failed),
        help("Fix the staging for the failed classifiers and re-run")
    )]
    PackagingFailed { failed: usize, total: usize },

    // Generic IO
    #[error("IO error: {message}")]
    #[diagnostic(code(geopack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GeopackError {
    fn from(err: std::io::Error) -> Self {
        GeopackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for geopack operations
pub type Result<T> = std::result::Result<T, GeopackError>;
