pub mod commands;
pub mod engine;

pub use engine::options::ComparisonOptions;
pub use engine::{diff, diff3};
