//! Bundle composition
//!
//! - [`archive`]: deterministic tar.gz writer (fixed headers, gzip mtime 0)
//! - [`assembler`]: composes full and reduced bundles per classifier from the
//!   staged resource tree

pub mod archive;
pub mod assembler;

pub use assembler::BundleAssembler;
