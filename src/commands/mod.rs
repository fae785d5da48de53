//! Command implementations
//!
//! Each submodule implements one CLI command:
//! - package: assemble full and reduced bundles per classifier
//! - verify: check the staged bundle layout
//! - list: show classifiers and the requirement catalog
//! - completions: generate shell completions

pub mod completions;
pub mod list;
pub mod package;
pub mod verify;
