//! Reply definitions
//!
//! Represents the one-line replies a session writes.

use std::fmt;

/// A reply to write back to the session's output stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The value found for a GET
    Value(String),

    /// A GET for a key that has never been set; renders as `NULL`
    NotFound,

    /// An invalid command, echoed back as a diagnostic
    Invalid(String),
}

impl Reply {
    /// Create a value reply
    pub fn value(value: impl Into<String>) -> Self {
        Reply::Value(value.into())
    }

    /// Create a not-found reply
    pub fn not_found() -> Self {
        Reply::NotFound
    }

    /// Create an invalid-command reply echoing the offending line
    pub fn invalid(line: impl Into<String>) -> Self {
        Reply::Invalid(line.into())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Value(value) => write!(f, "{}", value),
            Reply::NotFound => write!(f, "NULL"),
            Reply::Invalid(line) => write!(f, "Invalid command: {}", line),
        }
    }
}
