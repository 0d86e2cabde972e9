//! Protocol Module
//!
//! Defines the line-oriented command protocol for a session.
//!
//! ## Protocol Format
//!
//! One UTF-8 line per command:
//!
//! ```text
//! SET <key> <value...>    store a value; <value...> is everything after
//!                         the key, verbatim, spaces included
//! GET <key>               print the current value, or NULL if never set
//! EXIT                    end the session
//! ```
//!
//! Verbs match case-insensitively. Anything else, including a recognized
//! verb with the wrong argument count, is an invalid command: it is echoed
//! back as a diagnostic and the session continues.

mod command;
mod response;

pub use command::Command;
pub use response::Reply;
