//! Engine Module
//!
//! The core store that coordinates the log and the index.
//!
//! ## Responsibilities
//! - Recover the index from a full log replay on startup
//! - Route every write through the log before the index
//! - Serve reads from the index, never from disk
//!
//! ## Ordering Model
//!
//! Single-threaded and synchronous: one command is fully processed before
//! the next is accepted, so a GET immediately following a SET for the same
//! key always observes that SET's value. The log is ground truth and the
//! index is a derived cache: a failed append leaves the index untouched.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::index::KeyIndex;
use crate::log::LogStore;

/// The main storage engine
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Append-only log, the single source of truth
    log: LogStore,

    /// In-memory index, rebuilt from the log at open
    index: KeyIndex,
}

impl Engine {
    /// Open an engine with the given config.
    ///
    /// On startup:
    /// 1. Create the log file if it doesn't exist
    /// 2. Replay every record in log order
    /// 3. Fold the replay into a fresh index
    ///
    /// A replay that cannot be read aborts the open: the store cannot
    /// guarantee correctness without a readable log.
    pub fn open(config: Config) -> Result<Self> {
        let log = LogStore::new(&config.log_path);
        log.ensure_exists()?;

        let index = KeyIndex::rebuild_from(log.replay()?)?;

        tracing::debug!(
            path = %config.log_path.display(),
            keys = index.len(),
            "log replayed"
        );

        Ok(Self { config, log, index })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified log file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().log_path(path).build();
        Self::open(config)
    }

    /// Set a key to a value.
    ///
    /// Steps:
    /// 1. Durable append to the log
    /// 2. Update the index
    ///
    /// The order is mandatory. If the append fails the index is not
    /// touched, so log and index never disagree.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.log.append(key, value)?;
        self.index.insert_or_update(key.to_string(), value.to_string());

        Ok(())
    }

    /// Get the current value for a key, from the index only.
    ///
    /// `None` means the key has never been set; that is a normal outcome,
    /// not an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the log file path
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Number of distinct keys currently indexed
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
