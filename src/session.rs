//! Session Handler
//!
//! Drives one line-oriented command session against an engine.
//!
//! ## Responsibilities
//! - Read one command line at a time from the input stream
//! - Dispatch SET/GET/EXIT to the engine
//! - Write one reply line per GET or invalid command, flushed immediately
//!
//! Behavioral choices, fixed here as part of the external interface:
//! - A GET miss prints the literal line `NULL`
//! - A successful SET prints nothing
//! - EXIT ends the session with no output
//! - A failed durable append ends the session with the error; no further
//!   writes are accepted once the log stops taking them

use std::io::{BufRead, Write};

use crate::engine::Engine;
use crate::error::{EmberError, Result};
use crate::protocol::{Command, Reply};

/// Handles a single command session over a reader/writer pair
pub struct Session<R, W> {
    /// Command input, one line per command
    reader: R,

    /// Reply output, one line per reply
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session over the given streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Run the session until EXIT, end of input, or a hard failure.
    ///
    /// Invalid commands are reported and the loop continues; blank lines
    /// are skipped silently.
    pub fn run(&mut self, engine: &mut Engine) -> Result<()> {
        let mut line = String::new();

        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                // End of input terminates the session like EXIT
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match Command::parse(input) {
                Ok(Command::Set { key, value }) => {
                    engine.set(&key, &value)?;
                }
                Ok(Command::Get { key }) => {
                    let reply = match engine.get(&key) {
                        Some(value) => Reply::value(value),
                        None => Reply::not_found(),
                    };
                    self.reply(&reply)?;
                }
                Ok(Command::Exit) => break,
                Err(EmberError::InvalidCommand(input)) => {
                    self.reply(&Reply::invalid(input))?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Write one reply line and flush it so the peer sees it immediately
    fn reply(&mut self, reply: &Reply) -> Result<()> {
        writeln!(self.writer, "{}", reply)?;
        self.writer.flush()?;

        Ok(())
    }
}
