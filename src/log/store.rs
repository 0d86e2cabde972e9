//! Log store implementation
//!
//! Owns the path of the append-only file. Every append and every replay
//! acquires its own file handle and releases it when the operation ends, so
//! no buffered state outlives a single call.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::{Path, PathBuf};

use crate::error::{EmberError, Result};
use super::Record;

/// Durable, ordered, append-only record storage
pub struct LogStore {
    /// Path of the backing file; handles are scoped per operation
    path: PathBuf,
}

impl LogStore {
    /// Create a log store for the given file path.
    ///
    /// Does not touch the filesystem; call [`ensure_exists`](Self::ensure_exists)
    /// before the first replay.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file empty if it is absent.
    ///
    /// No error (and no modification) if it already exists.
    pub fn ensure_exists(&self) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| EmberError::LogOpen {
                path: self.path.clone(),
                source,
            })?;

        Ok(())
    }

    /// Append one record to the end of the log, durably.
    ///
    /// The full line is written in a single call and synced to disk before
    /// returning, so a committed append never leaves a partial trailing
    /// record. On failure the caller must not update any in-memory state.
    pub fn append(&self, key: &str, value: &str) -> Result<()> {
        let line = Record::new(key, value).to_line();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(EmberError::LogAppend)?;

        file.write_all(line.as_bytes())
            .map_err(EmberError::LogAppend)?;
        file.sync_all().map_err(EmberError::LogAppend)?;

        Ok(())
    }

    /// Open the log for reading and iterate its records in file order.
    ///
    /// The returned sequence is lazy and finite; each call starts over from
    /// the beginning of the file. Unparsable lines yield nothing. An
    /// unopenable file is an error, never an empty replay.
    pub fn replay(&self) -> Result<Replay> {
        let file = File::open(&self.path).map_err(|source| EmberError::LogOpen {
            path: self.path.clone(),
            source,
        })?;

        Ok(Replay {
            lines: BufReader::new(file).lines(),
        })
    }
}

/// Iterator over the records of one full log scan, oldest first
pub struct Replay {
    lines: Lines<BufReader<File>>,
}

impl Iterator for Replay {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    // Lines that don't parse as records are skipped silently
                    if let Some(record) = Record::parse(&line) {
                        return Some(Ok(record));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
