//! Configuration for EmberKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default log file name, created in the working directory when no path is
/// configured.
pub const DEFAULT_LOG_FILE: &str = "ember.db";

/// Main configuration for an EmberKV instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the append-only log file. Created empty if absent; only ever
    /// appended to afterwards, never rewritten or truncated.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the log file path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
