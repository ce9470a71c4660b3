//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! tuning parameters from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::OptimizerConfig;

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads a single YAML file of tuning parameters.
/// Missing fields fall back to the engine defaults, so the file only
/// needs to override what differs.
///
/// # Example
///
/// ```no_run
/// use pto_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// let weights = &loader.config().scoring;
/// println!("in-band bonus: {}", weights.in_band_bonus);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OptimizerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/default.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader carrying the built-in defaults, without touching
    /// the filesystem.
    pub fn with_defaults() -> Self {
        Self {
            config: OptimizerConfig::default(),
        }
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}
