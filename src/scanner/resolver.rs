//! Locate a named directory beneath a starting path

use crate::types::EnvCmpError;
use log::warn;
use std::path::{Path, PathBuf};

/// Find the first directory named `dir_name` beneath `starting_path`.
///
/// Walks the tree depth-first with entries sorted by file name, so the
/// result is stable across platforms. Returns the absolute path of the
/// first basename match in traversal order.
///
/// Known ambiguity: when several directories share the basename, which one
/// wins depends purely on traversal order and is not guaranteed to be the
/// "intended" one. Callers with colliding names should disambiguate via
/// the tree layout, not rely on this function.
///
/// # Errors
/// `EnvCmpError::DirectoryNotFound` when no directory with that basename
/// exists anywhere under `starting_path`.
pub fn find_dir(starting_path: &Path, dir_name: &str) -> Result<PathBuf, EnvCmpError> {
    let walker = ignore::WalkBuilder::new(starting_path)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error during directory traversal: {}", e);
                continue;
            }
        };

        // Depth 0 is the starting path itself, never a candidate
        if entry.depth() == 0 {
            continue;
        }

        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_dir && entry.file_name() == dir_name {
            return Ok(entry.into_path());
        }
    }

    Err(EnvCmpError::DirectoryNotFound {
        name: dir_name.to_string(),
        root: starting_path.to_path_buf(),
    })
}
