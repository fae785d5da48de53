//! Deterministic tar.gz archive writer
//!
//! Bundles must be byte-for-byte reproducible on unchanged staging input, so
//! every source of nondeterminism in the container is pinned: entries are
//! appended in the order the caller provides (the assembler sorts its walk),
//! tar headers carry mtime 0 / uid 0 / gid 0 / fixed mode, and the gzip
//! stream writes mtime 0 and an unknown-OS byte.

use std::io::Write;
use std::path::Path;

use flate2::{Compression, GzBuilder};
use tar::{Builder, Header};

use crate::error::{GeopackError, Result};

/// Tar.gz writer with pinned, reproducible headers
pub struct ArchiveWriter<W: Write> {
    tar: Builder<flate2::write::GzEncoder<W>>,
}

impl<W: Write> ArchiveWriter<W> {
    /// Create a writer emitting into the given sink
    pub fn new(writer: W) -> Self {
        let encoder = GzBuilder::new()
            .mtime(0)
            .operating_system(255) // unknown, platform-independent output
            .write(writer, Compression::best());

        let tar = Builder::new(encoder);
        Self { tar }
    }

    /// Append one file from disk under the given archive-internal path.
    ///
    /// Long entry paths are handled via the GNU long-name extension.
    pub fn append_file(&mut self, entry_path: &str, source: &Path) -> Result<()> {
        let data = std::fs::read(source).map_err(|e| GeopackError::ArchiveWriteFailed {
            entry: entry_path.to_string(),
            reason: format!("reading {}: {}", source.display(), e),
        })?;

        let mut header = Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_uid(0);
        header.set_gid(0);
        header.set_mtime(0);
        header.set_cksum();

        self.tar
            .append_data(&mut header, entry_path, &data[..])
            .map_err(|e| GeopackError::ArchiveWriteFailed {
                entry: entry_path.to_string(),
                reason: e.to_string(),
            })
    }

    /// Finalize the tar stream and flush the gzip trailer
    pub fn finish(self, archive_name: &str) -> Result<()> {
        let encoder = self
            .tar
            .into_inner()
            .map_err(|e| GeopackError::ArchiveFinalizeFailed {
                path: archive_name.to_string(),
                reason: e.to_string(),
            })?;

        encoder
            .finish()
            .map_err(|e| GeopackError::ArchiveFinalizeFailed {
                path: archive_name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
