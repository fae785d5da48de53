//! Classifier registry and requirement catalog
//!
//! Both are fixed at configuration load and immutable afterwards:
//! - [`registry`]: the ordered set of supported platform classifiers
//! - [`requirement`]: logical data requirements and their candidate filenames

pub mod registry;
pub mod requirement;

pub use registry::ClassifierRegistry;
pub use requirement::{Requirement, RequirementCatalog};
