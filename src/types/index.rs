//! IdentityIndex - Mapping from file identity to absolute path

use super::FileIdentity;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from [`FileIdentity`] to the absolute path that produced it,
/// used for content lookups during the comparison phase.
///
/// Built as a pure transformation over an enumerated (identity, path)
/// sequence; no I/O. Identities can collide within one environment (depth
/// is discarded by identity construction) and the later occurrence in the
/// input wins. That permissiveness is intentional, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityIndex {
    entries: BTreeMap<FileIdentity, PathBuf>,
}

impl IdentityIndex {
    /// Build an index from (identity, absolute path) pairs
    pub fn build<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (FileIdentity, PathBuf)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Look up the absolute path recorded for an identity
    pub fn get(&self, identity: &FileIdentity) -> Option<&Path> {
        self.entries.get(identity).map(PathBuf::as_path)
    }

    /// Check if an identity is present
    pub fn contains(&self, identity: &FileIdentity) -> bool {
        self.entries.contains_key(identity)
    }

    /// Iterator over the identities, in ascending order
    pub fn identities(&self) -> impl Iterator<Item = &FileIdentity> {
        self.entries.keys()
    }

    /// Number of distinct identities in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: &str, path: &str) -> (FileIdentity, PathBuf) {
        let (parent, name) = id.split_once('/').expect("test identity has one slash");
        (FileIdentity::new(parent, name), PathBuf::from(path))
    }

    #[test]
    fn test_build_empty() {
        let index = IdentityIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_build_and_lookup() {
        let index = IdentityIndex::build(vec![
            pair("src/a.txt", "/env/dev/app/src/a.txt"),
            pair("src/b.txt", "/env/dev/app/src/b.txt"),
        ]);

        assert_eq!(index.len(), 2);
        let id = FileIdentity::new("src", "a.txt");
        assert!(index.contains(&id));
        assert_eq!(index.get(&id), Some(Path::new("/env/dev/app/src/a.txt")));
    }

    #[test]
    fn test_lookup_missing_identity() {
        let index = IdentityIndex::build(vec![pair("src/a.txt", "/x/src/a.txt")]);
        let missing = FileIdentity::new("src", "zzz.txt");
        assert!(!index.contains(&missing));
        assert_eq!(index.get(&missing), None);
    }

    #[test]
    fn test_collision_last_occurrence_wins() {
        // Identity collisions within one environment are allowed; the later
        // input pair overwrites the earlier one.
        let index = IdentityIndex::build(vec![
            pair("src/a.txt", "/env/app/first/src/a.txt"),
            pair("src/a.txt", "/env/app/second/src/a.txt"),
        ]);

        assert_eq!(index.len(), 1);
        let id = FileIdentity::new("src", "a.txt");
        assert_eq!(index.get(&id), Some(Path::new("/env/app/second/src/a.txt")));
    }

    #[test]
    fn test_build_is_idempotent() {
        let pairs = vec![
            pair("src/b.txt", "/x/src/b.txt"),
            pair("src/a.txt", "/x/src/a.txt"),
        ];

        let first = IdentityIndex::build(pairs.clone());
        let second = IdentityIndex::build(pairs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_identities_sorted_ascending() {
        let index = IdentityIndex::build(vec![
            pair("src/z.txt", "/x/src/z.txt"),
            pair("config/app.yaml", "/x/config/app.yaml"),
            pair("src/a.txt", "/x/src/a.txt"),
        ]);

        let ids: Vec<_> = index.identities().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["config/app.yaml", "src/a.txt", "src/z.txt"]);
    }
}
