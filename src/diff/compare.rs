//! Content-equality strategies for shared files

use crate::types::EnvCmpError;
use std::fs;
use std::path::Path;

/// Pluggable equality test for the content phase of a comparison.
///
/// The engine only depends on this trait, so a stronger byte-for-byte or
/// hash-based strategy can be substituted without touching the engine.
pub trait ContentComparer {
    /// Decide whether the files at `left` and `right` have equal content
    fn content_equals(&self, left: &Path, right: &Path) -> Result<bool, EnvCmpError>;
}

/// Metadata-based "shallow" equality: file size plus modification time.
///
/// This is explicitly NOT a strong integrity check. Two byte-different
/// files pass when size and mtime coincidentally match, and identical
/// files fail spuriously when only the mtime differs. That fidelity limit
/// is part of the contract; strengthen it by swapping in a different
/// [`ContentComparer`], not by changing this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowComparer;

impl ContentComparer for ShallowComparer {
    fn content_equals(&self, left: &Path, right: &Path) -> Result<bool, EnvCmpError> {
        let left_meta = fs::metadata(left)?;
        let right_meta = fs::metadata(right)?;

        Ok(left_meta.len() == right_meta.len()
            && left_meta.modified()? == right_meta.modified()?)
    }
}
