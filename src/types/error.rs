//! Error types for envcmp

use std::path::PathBuf;
use thiserror::Error;

/// Error types for envcmp operations
#[derive(Debug, Error)]
pub enum EnvCmpError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unparseable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required named directory does not exist anywhere under the root
    #[error("No directory named '{name}' found under '{root}'")]
    DirectoryNotFound { name: String, root: PathBuf },

    /// Both environments enumerated to zero files; the comparison would be
    /// vacuous, which almost always means a misconfigured working directory
    /// or an include list naming folders that do not exist
    #[error(
        "Both environments ('{left}' and '{right}') returned zero files. \
         Check your current path or the config file for non-existing folders to include"
    )]
    NoResults { left: String, right: String },
}

impl EnvCmpError {
    /// Check if this error means a named directory could not be located
    pub fn is_not_found(&self) -> bool {
        matches!(self, EnvCmpError::DirectoryNotFound { .. })
    }

    /// Check if this error is the degenerate zero-results case
    pub fn is_no_results(&self) -> bool {
        matches!(self, EnvCmpError::NoResults { .. })
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, EnvCmpError::Config(_))
    }
}
