//! The `run` command: compare one directory between two environments

use crate::config;
use crate::diff::{ComparisonEngine, ComparisonResult};
use crate::report::ConsoleReporter;
use crate::types::EnvCmpError;
use console::style;

/// Wire the full pipeline together: resolve the root, load (or create)
/// the folder-filter policy, run the comparison and print a verdict.
///
/// A comparison that finds differences still returns `Ok`; only
/// resolution, enumeration or configuration failures are errors.
pub fn run(env_left: &str, env_right: &str, name_dir: &str) -> Result<ComparisonResult, EnvCmpError> {
    let root = config::root_path()?;
    let (filter, _source) = config::load_or_init(&root)?;

    // The policy file is shared, so both environments get the same filter
    let engine = ComparisonEngine::new(root, filter.clone(), filter);

    let mut reporter = ConsoleReporter;
    let result = engine.compare(env_left, env_right, name_dir, &mut reporter)?;

    if result.is_clean() {
        println!("{}", style("RESULT: environments match").green().bold());
    } else {
        println!(
            "{}",
            style("RESULT: differences found").yellow().bold()
        );
    }

    Ok(result)
}
