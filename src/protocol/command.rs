//! Command definitions
//!
//! Represents commands parsed from session input lines.

use crate::error::{EmberError, Result};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store a value under a key
    Set { key: String, value: String },

    /// Look up the current value for a key
    Get { key: String },

    /// End the session
    Exit,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// The line is split into at most 3 tokens on the space character, the
    /// same tokenization the log parser uses: a SET value is everything
    /// after the second space, verbatim. Verbs match case-insensitively.
    /// A recognized verb with the wrong argument count is invalid, like any
    /// unrecognized input.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut tokens = line.splitn(3, ' ');

        let verb = tokens.next().unwrap_or("");
        let arg = tokens.next();
        let rest = tokens.next();

        if verb.eq_ignore_ascii_case("SET") {
            if let (Some(key), Some(value)) = (arg, rest) {
                return Ok(Command::Set {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        } else if verb.eq_ignore_ascii_case("GET") {
            if let (Some(key), None) = (arg, rest) {
                return Ok(Command::Get {
                    key: key.to_string(),
                });
            }
        } else if verb.eq_ignore_ascii_case("EXIT") && arg.is_none() {
            return Ok(Command::Exit);
        }

        Err(EmberError::InvalidCommand(line.to_string()))
    }
}
