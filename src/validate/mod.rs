//! Staging validation
//!
//! Two independent checks run against the staged resource tree:
//! - [`subset`]: every requirement group has at least one candidate file
//!   staged in the reference-data directory (gates reduced bundles)
//! - [`layout`]: every classifier root carries the manifest descriptor

pub mod layout;
pub mod subset;

pub use layout::verify_layout;
pub use subset::validate_subset;
