//! Reporting of comparison findings
//!
//! The engine never talks to a logger or to stdout directly for its
//! findings; it hands them to a [`DiffReporter`] injected by the caller.
//! That keeps the core testable without capturing log side channels.

use crate::types::FileIdentity;
use console::style;

/// Sink for the human-readable outcome of a comparison run
pub trait DiffReporter {
    /// Name-level phase succeeded: both environments hold the same
    /// identity set
    fn report_names_match(&mut self, left_env: &str, right_env: &str);

    /// Identities missing from `env_name` (present on the other side).
    /// Implementations emit nothing when the set is empty.
    fn report_missing(&mut self, env_name: &str, missing: &[FileIdentity]);

    /// Content phase succeeded on every shared identity
    fn report_contents_match(&mut self);

    /// Shared identities whose content failed the equality check
    fn report_content_mismatches(&mut self, mismatches: &[FileIdentity]);
}

/// Reporter that prints styled lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl DiffReporter for ConsoleReporter {
    fn report_names_match(&mut self, left_env: &str, right_env: &str) {
        println!(
            "{}",
            style(format!(
                "SUCCESS: envs '{}' and '{}' contain the same set of files",
                left_env, right_env
            ))
            .green()
        );
    }

    fn report_missing(&mut self, env_name: &str, missing: &[FileIdentity]) {
        if missing.is_empty() {
            return;
        }

        println!(
            "{}",
            style(format!(
                "The following files are missing in env '{}':",
                env_name
            ))
            .yellow()
            .bold()
        );
        for identity in missing {
            println!("----{}", identity);
        }
    }

    fn report_contents_match(&mut self) {
        println!(
            "{}",
            style("SUCCESS: all shared files have matching content").green()
        );
    }

    fn report_content_mismatches(&mut self, mismatches: &[FileIdentity]) {
        println!(
            "{}",
            style("The following shared files differ in content:")
                .yellow()
                .bold()
        );
        for identity in mismatches {
            println!("----{}", identity);
        }
    }
}

/// Reporter that discards everything, for callers that only want the
/// returned [`ComparisonResult`](crate::diff::ComparisonResult)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl DiffReporter for NullReporter {
    fn report_names_match(&mut self, _left_env: &str, _right_env: &str) {}
    fn report_missing(&mut self, _env_name: &str, _missing: &[FileIdentity]) {}
    fn report_contents_match(&mut self) {}
    fn report_content_mismatches(&mut self, _mismatches: &[FileIdentity]) {}
}
