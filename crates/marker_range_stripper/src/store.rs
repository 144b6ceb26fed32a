// crates/marker_range_stripper/src/store.rs

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::document::{join_lines, split_lines};
use crate::markers::MarkerSet;
use crate::stripper::strip;

/// Reads and writes whole documents.
pub trait DocumentStore {
    /// Loads every line of the document at `path`, terminators included.
    fn load(&self, path: &Path) -> Result<Vec<String>>;
    /// Replaces the document at `path` with `lines`.
    fn save(&self, path: &Path, lines: &[String]) -> Result<()>;
}

/// Plain file system store: read-all, then truncate and write-all.
pub struct FsDocumentStore;

impl DocumentStore for FsDocumentStore {
    fn load(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?;
        Ok(split_lines(&text))
    }

    fn save(&self, path: &Path, lines: &[String]) -> Result<()> {
        fs::write(path, join_lines(lines))
            .with_context(|| format!("Error writing {}", path.display()))
    }
}

/// Strips the document at `path` through `store`.
///
/// Returns the reported removed-line count, or `None` when the markers were
/// not found; the document is only written back in the first case.
pub fn strip_file_with_store<P: AsRef<Path>>(
    store: &dyn DocumentStore,
    path: P,
    markers: &MarkerSet<'_>,
) -> Result<Option<isize>> {
    let path = path.as_ref();
    let lines = store.load(path)?;
    debug!("loaded {} lines from {}", lines.len(), path.display());

    let outcome = strip(&lines, markers);
    if outcome.markers_found() {
        store.save(path, &outcome.lines)?;
        debug!("wrote {} lines to {}", outcome.lines.len(), path.display());
    }
    Ok(outcome.removed)
}

/// [`strip_file_with_store`] against the file system.
pub fn strip_file<P: AsRef<Path>>(path: P, markers: &MarkerSet<'_>) -> Result<Option<isize>> {
    strip_file_with_store(&FsDocumentStore, path, markers)
}
