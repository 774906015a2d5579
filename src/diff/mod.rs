//! Comparison engine and content-equality strategies

mod compare;
mod engine;

pub use compare::{ContentComparer, ShallowComparer};
pub use engine::{ComparisonEngine, ComparisonResult};
