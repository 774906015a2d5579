//! FileIdentity - Normalized key used to match files across environments

use std::fmt;
use std::path::Path;

/// Normalized file identity: `<parent-dir-basename>/<file-basename>`.
///
/// The identity is deliberately NOT the full relative path: two files with
/// the same basename pair in different branches of the tree collapse to the
/// same identity. This anchors matching to the immediate parent directory
/// name only, so a subdirectory moved to a different depth still matches
/// its counterpart in the other environment. Must be preserved exactly for
/// compatibility with existing reports.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileIdentity(String);

impl FileIdentity {
    /// Build an identity from the enclosing directory's basename and the
    /// file's basename.
    pub fn new(parent_dir: &str, file_name: &str) -> Self {
        Self(format!("{}/{}", parent_dir, file_name))
    }

    /// Build an identity from an absolute or relative file path.
    ///
    /// Returns `None` when the path has no final component. A file sitting
    /// directly under the filesystem root gets an empty parent segment.
    pub fn from_file_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        let parent_dir = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(Self::new(&parent_dir, &file_name))
    }

    /// View the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
