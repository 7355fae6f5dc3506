//! Directory enumeration for dataset inputs.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{PipelineError, PipelineResult};

/// Lists the direct entries of a dataset directory.
///
/// Enumeration is non-recursive and keeps the order reported by the
/// filesystem. Every entry is returned, whatever its type or extension:
/// subdirectories and broken links fail later, when the decoder reaches them.
pub struct FileDiscovery;

impl FileDiscovery {
    /// Enumerate the entries directly inside `dir`.
    pub fn discover(dir: &Path) -> PipelineResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(PipelineError::NotADirectory(dir.to_path_buf()));
        }

        // Links are not followed here so a dangling one is listed rather
        // than aborting the listing.
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .map(|entry| {
                entry
                    .map(walkdir::DirEntry::into_path)
                    .map_err(|e| PipelineError::ListDir {
                        path: dir.to_path_buf(),
                        source: e.into(),
                    })
            })
            .collect()
    }
}
