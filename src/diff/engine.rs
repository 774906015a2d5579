//! Comparison engine - resolves, enumerates and diffs two environments

use crate::config::FolderFilter;
use crate::diff::compare::{ContentComparer, ShallowComparer};
use crate::report::DiffReporter;
use crate::scanner::{enumerate_files, find_dir};
use crate::types::{EnvCmpError, FileIdentity, IdentityIndex};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Transient outcome of one comparison run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Identities present in the left environment only (missing in right)
    pub only_in_left: Vec<FileIdentity>,

    /// Identities present in the right environment only (missing in left)
    pub only_in_right: Vec<FileIdentity>,

    /// Shared identities whose content failed the equality check
    pub content_mismatches: Vec<FileIdentity>,
}

impl ComparisonResult {
    /// Name-level phase succeeded: both environments hold the same identities
    pub fn names_match(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }

    /// Content phase succeeded on the shared subset
    pub fn contents_match(&self) -> bool {
        self.content_mismatches.is_empty()
    }

    /// No differences of any kind
    pub fn is_clean(&self) -> bool {
        self.names_match() && self.contents_match()
    }
}

/// Orchestrates the comparison of two environments.
///
/// A single linear pipeline: resolve each environment root under the
/// starting root, resolve the target directory beneath it, enumerate files
/// with that environment's folder filter, then diff the identity sets in
/// both directions and check content equality on the intersection. No
/// retries, no partial resumption; any resolution or enumeration failure
/// aborts the whole run.
pub struct ComparisonEngine {
    root: PathBuf,
    left_filter: FolderFilter,
    right_filter: FolderFilter,
    comparer: Box<dyn ContentComparer>,
}

impl ComparisonEngine {
    /// Create an engine rooted at `root` with one folder filter per
    /// environment, using shallow content equality.
    pub fn new(root: PathBuf, left_filter: FolderFilter, right_filter: FolderFilter) -> Self {
        Self {
            root,
            left_filter,
            right_filter,
            comparer: Box::new(ShallowComparer),
        }
    }

    /// Substitute the content-equality strategy
    pub fn with_comparer(mut self, comparer: Box<dyn ContentComparer>) -> Self {
        self.comparer = comparer;
        self
    }

    /// Compare directory `dir_name` between two named environments,
    /// routing human-readable findings through `reporter`.
    ///
    /// # Errors
    /// * `DirectoryNotFound` when an environment or the target directory
    ///   cannot be located
    /// * `NoResults` when both environments enumerate to zero files
    /// * `Io` for filesystem failures during enumeration or content checks
    pub fn compare(
        &self,
        left_env: &str,
        right_env: &str,
        dir_name: &str,
        reporter: &mut dyn DiffReporter,
    ) -> Result<ComparisonResult, EnvCmpError> {
        info!("Start searching in env '{}'", left_env);
        let left_files = self.enumerate_env(left_env, dir_name, &self.left_filter)?;
        info!("Finished searching in env '{}'", left_env);

        info!("Start searching in env '{}'", right_env);
        let right_files = self.enumerate_env(right_env, dir_name, &self.right_filter)?;
        info!("Finished searching in env '{}'", right_env);

        info!("Start comparing envs");

        if left_files.is_empty() && right_files.is_empty() {
            return Err(EnvCmpError::NoResults {
                left: left_env.to_string(),
                right: right_env.to_string(),
            });
        }

        let left_index = IdentityIndex::build(left_files);
        let right_index = IdentityIndex::build(right_files);

        let left_ids: BTreeSet<FileIdentity> = left_index.identities().cloned().collect();
        let right_ids: BTreeSet<FileIdentity> = right_index.identities().cloned().collect();

        let only_in_left: Vec<FileIdentity> = left_ids.difference(&right_ids).cloned().collect();
        let only_in_right: Vec<FileIdentity> = right_ids.difference(&left_ids).cloned().collect();

        if only_in_left.is_empty() && only_in_right.is_empty() {
            reporter.report_names_match(left_env, right_env);
        } else {
            warn!("File sets differ between '{}' and '{}'", left_env, right_env);
            // Files the other side has are attributed to the environment
            // they are missing from.
            reporter.report_missing(left_env, &only_in_right);
            reporter.report_missing(right_env, &only_in_left);
        }

        let mut content_mismatches = Vec::new();
        for identity in left_ids.intersection(&right_ids) {
            let (Some(left_path), Some(right_path)) =
                (left_index.get(identity), right_index.get(identity))
            else {
                continue;
            };

            if !self.comparer.content_equals(left_path, right_path)? {
                content_mismatches.push(identity.clone());
            }
        }

        if content_mismatches.is_empty() {
            reporter.report_contents_match();
        } else {
            warn!(
                "{} shared file(s) differ in content between '{}' and '{}'",
                content_mismatches.len(),
                left_env,
                right_env
            );
            reporter.report_content_mismatches(&content_mismatches);
        }

        Ok(ComparisonResult {
            only_in_left,
            only_in_right,
            content_mismatches,
        })
    }

    fn enumerate_env(
        &self,
        env_name: &str,
        dir_name: &str,
        filter: &FolderFilter,
    ) -> Result<Vec<(FileIdentity, PathBuf)>, EnvCmpError> {
        debug!(
            "[{}] Search of files will be initiated from path: '{}'",
            env_name,
            self.root.display()
        );
        info!(
            "[{}] Folders to compare in directory '{}': {:?}",
            env_name, dir_name, filter.include
        );
        info!(
            "[{}] Folders not to compare in directory '{}': {:?}",
            env_name, dir_name, filter.exclude
        );

        let env_path = find_dir(&self.root, env_name)?;
        debug!("[{}] Path of env found: '{}'", env_name, env_path.display());

        let target_path = find_dir(&env_path, dir_name)?;
        debug!(
            "[{}] Path of directory '{}' found: '{}'",
            env_name,
            dir_name,
            target_path.display()
        );

        let files = enumerate_files(&target_path, filter)?;
        info!(
            "[{}] List of files in directory '{}' contains {} file(s)",
            env_name,
            dir_name,
            files.len()
        );

        Ok(files)
    }
}
