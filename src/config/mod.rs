//! Configuration management
//!
//! Two inputs live here: the command line surface, and the TOML policy
//! file (`envcmp.toml`) that controls which folders an environment scan
//! emits files from.

use crate::types::EnvCmpError;
use clap::{Parser, Subcommand};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the policy file expected at the root path
pub const CONFIG_FILE_NAME: &str = "envcmp.toml";

/// Command-line interface for envcmp
#[derive(Debug, Parser)]
#[command(name = "envcmp", version, about = "Environment comparison tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare the files of a directory between two environments
    Run {
        /// Left environment you want to compare
        #[arg(long = "env-left")]
        env_left: String,

        /// Right environment you want to compare
        #[arg(long = "env-right")]
        env_right: String,

        /// The directory name of the files you want to compare
        #[arg(long = "name-dir")]
        name_dir: String,
    },
}

/// Folder filter controlling which directories' files are emitted during
/// enumeration.
///
/// `include` and `exclude` are ordered lists of folder names matched
/// against the path segments of every visited directory: OR within each
/// list, AND across the lists, exclude dominates include. Both lists empty
/// means "emit everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderFilter {
    /// Folder names to include; empty means every directory is searched
    #[serde(default)]
    pub include: Vec<String>,

    /// Folder names to exclude; wins over include
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FolderFilter {
    /// The default policy: include everything, exclude nothing
    pub fn include_all() -> Self {
        Self::default()
    }

    /// Decide whether a directory with the given path segments should have
    /// its files emitted.
    pub fn allows(&self, segments: &[&str]) -> bool {
        let should_search = self.include.is_empty()
            || segments.iter().any(|s| self.include.iter().any(|f| f == s));

        let should_exclude = !self.exclude.is_empty()
            && segments.iter().any(|s| self.exclude.iter().any(|f| f == s));

        should_search && !should_exclude
    }
}

/// On-disk shape of `envcmp.toml`: one top-level table per project
#[derive(Debug, Serialize, Deserialize)]
struct PolicyFile {
    envcmp: FolderFilter,
}

/// Where a resolved [`FolderFilter`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from an existing policy file
    File,
    /// Policy file was missing; a default file was written to disk
    DefaultCreated,
}

/// Load the folder filter policy from `<root>/envcmp.toml`.
///
/// When the file is missing, the default include-everything policy is
/// substituted, persisted to disk so the operator can edit it, and a
/// warning is logged. A file that exists but fails to parse is a hard
/// configuration error, not a recoverable miss.
pub fn load_or_init(root: &Path) -> Result<(FolderFilter, ConfigSource), EnvCmpError> {
    let path = root.join(CONFIG_FILE_NAME);

    match fs::read_to_string(&path) {
        Ok(content) => {
            let policy: PolicyFile = toml::from_str(&content).map_err(|e| {
                EnvCmpError::Config(format!("Failed to parse '{}': {}", path.display(), e))
            })?;
            info!("Found config file '{}'", path.display());
            Ok((policy.envcmp, ConfigSource::File))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Could not find config file '{}'", path.display());

            let policy = PolicyFile {
                envcmp: FolderFilter::include_all(),
            };
            let content = toml::to_string_pretty(&policy)
                .map_err(|e| EnvCmpError::Config(format!("Failed to render default: {}", e)))?;
            fs::write(&path, content)?;

            warn!("Config file created '{}'", path.display());
            warn!("Default will be invoked: all folders will be compared");
            Ok((policy.envcmp, ConfigSource::DefaultCreated))
        }
        Err(e) => Err(EnvCmpError::Io(e)),
    }
}

/// Absolute root path the comparison starts from (the process working
/// directory, matching how the tool is invoked in practice).
pub fn root_path() -> Result<PathBuf, EnvCmpError> {
    Ok(std::env::current_dir()?)
}
