//! KeyIndex implementation
//!
//! HashMap-backed index rebuilt from a replay and mutated in place per SET.

use std::collections::HashMap;

use crate::error::Result;
use crate::log::Record;

/// In-memory mapping from key to its most recent value.
///
/// A `KeyIndex` can only be obtained through [`rebuild_from`](Self::rebuild_from),
/// so every live value has already folded a full replay: there is no
/// uninitialized state to guard against, and no way back to one.
pub struct KeyIndex {
    map: HashMap<String, String>,
}

impl KeyIndex {
    /// Fold a replay sequence, in order, into a ready index.
    ///
    /// Later records for the same key overwrite earlier ones, so the result
    /// is last-write-wins in log order. An I/O error from the sequence
    /// aborts the rebuild; a fresh replay can always be retried.
    pub fn rebuild_from<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let mut index = Self {
            map: HashMap::new(),
        };

        for record in records {
            let record = record?;
            index.insert_or_update(record.key, record.value);
        }

        Ok(index)
    }

    /// Set or overwrite the mapping for a key.
    ///
    /// Idempotent: applying the same pair twice leaves the same state.
    pub fn insert_or_update(&mut self, key: String, value: String) {
        self.map.insert(key, value);
    }

    /// Look up the current value for a key.
    ///
    /// `None` means the key has never been set. Absence is a normal
    /// outcome, not a failure.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Number of distinct keys ever set
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no key has ever been set
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
