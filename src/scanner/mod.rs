//! Directory resolution and enumeration

mod resolver;
mod walker;

pub use resolver::find_dir;
pub use walker::enumerate_files;
