//! # envcmp - Environment Comparison Tool
//!
//! Verifies that two "environment" directory trees contain the same set of
//! files and that shared files have matching content, for validating that
//! a deployment or configuration tree was replicated correctly.
//!
//! Files are matched by a normalized identity of the form
//! `<parent-dir-basename>/<file-basename>`, and shared files are checked
//! with a shallow (size + mtime) equality test.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod report;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::{Cli, FolderFilter};
pub use diff::{ComparisonEngine, ComparisonResult};
pub use report::{ConsoleReporter, DiffReporter};
pub use types::{EnvCmpError, FileIdentity, IdentityIndex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
