use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::error::IconError;

/// List the direct children of `dir`, sorted by file name.
///
/// Symlinks are followed, so `DirEntry::file_type` describes the link target.
/// Children that cannot be stat'ed (dangling links, races) are dropped; failing
/// to read `dir` itself is an error.
pub fn sorted_children(dir: &Path) -> Result<Vec<DirEntry>, IconError> {
    let mut children = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) => children.push(entry),
            Err(err) if err.depth() == 0 => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                return Err(IconError::io(path, io::Error::from(err)));
            }
            Err(err) => {
                tracing::debug!("skipping unreadable entry in {}: {}", dir.display(), err);
            }
        }
    }

    Ok(children)
}

/// Hidden entries start with a dot
pub fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Non-hidden regular files directly under `dir`, sorted by name
pub fn visible_files(dir: &Path) -> Result<Vec<DirEntry>, IconError> {
    Ok(sorted_children(dir)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file() && !is_hidden(entry))
        .collect())
}
