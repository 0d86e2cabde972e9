//! Key Index Module
//!
//! In-memory view of the current value for every key, folded from the log.
//!
//! ## Responsibilities
//! - Rebuild once from a full log replay at startup
//! - Apply each SET incrementally to stay consistent with the log
//! - Serve point lookups without touching disk
//!
//! ## Data Structure Choice
//! A plain `HashMap<String, String>`: the store only ever does point
//! lookups, so a direct key → value mapping with O(1) access is the right
//! shape. Missing keys are an `Option::None`, never an error.

mod table;

pub use table::KeyIndex;
