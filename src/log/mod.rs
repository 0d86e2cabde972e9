//! Log Store Module
//!
//! Provides durability through an append-only text log.
//!
//! ## Responsibilities
//! - Append one record line per write, durable before returning
//! - Replay all records in file order for startup recovery
//! - Skip unparsable lines silently during replay
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────┐
//! │ SET <key> <value>\n          │
//! ├──────────────────────────────┤
//! │ SET <key> <value>\n          │
//! ├──────────────────────────────┤
//! │ ...                          │
//! └──────────────────────────────┘
//! ```
//!
//! UTF-8 text, one record per line. `SET` is the only operation; keys carry
//! no spaces (the parser splits on the first two space characters), values
//! are everything after the second space, verbatim. Spaces inside values are
//! not escaped, so they round-trip untouched.

mod record;
mod store;

pub use record::Record;
pub use store::{LogStore, Replay};
