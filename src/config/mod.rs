//! Configuration for the PTO Optimization Engine.
//!
//! Scoring weights and selection limits are tunable through a YAML file;
//! the built-in defaults reproduce the documented engine behavior.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OptimizerConfig, ScoringWeights, SelectorLimits};
