//! Recursive file enumeration with folder filtering

use crate::config::FolderFilter;
use crate::types::{EnvCmpError, FileIdentity};
use log::warn;
use std::path::{Component, Path, PathBuf};

/// Enumerate the files under `path`, subject to a folder filter.
///
/// Every directory in the subtree is visited and judged independently
/// against the filter using the segments of its full path: a directory
/// that fails the predicate is skipped for emission but its children are
/// still descended into and evaluated on their own. Files in an admitted
/// directory are emitted as `(identity, absolute path)` pairs, where the
/// identity is `<dir-basename>/<file-basename>` (see [`FileIdentity`]).
///
/// The result is sorted ascending by identity string. Underlying traversal
/// order is platform-dependent, so the sort is an explicit contract, not a
/// side effect.
///
/// # Errors
/// Fails when `path` does not exist; traversal errors deeper in the tree
/// (unreadable subdirectories) are logged and skipped.
pub fn enumerate_files(
    path: &Path,
    filter: &FolderFilter,
) -> Result<Vec<(FileIdentity, PathBuf)>, EnvCmpError> {
    // A missing root is a caller error and aborts the run; the walker
    // itself would silently yield nothing.
    std::fs::metadata(path)?;

    let mut files = Vec::new();

    let walker = ignore::WalkBuilder::new(path)
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

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(true) {
            continue;
        }

        let Some(parent) = entry.path().parent() else {
            continue;
        };

        if !filter.allows(&path_segments(parent)) {
            continue;
        }

        if let Some(identity) = FileIdentity::from_file_path(entry.path()) {
            files.push((identity, entry.into_path()));
        }
    }

    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(files)
}

/// Decompose a directory path into its normal components
fn path_segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}
