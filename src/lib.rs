//! # EmberKV
//!
//! A minimal durable key-value store with:
//! - An append-only text log as the single source of truth
//! - Startup recovery by replaying the log into an in-memory index
//! - Reads served entirely from memory, never touching disk
//! - A line-oriented SET/GET/EXIT command session
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Session                                │
//! │           (one command line in, one reply out)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │          (append before index, strict ordering)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Log Store  │─ replay ▶│  Key Index  │
//!   │  (Append)   │          │  (HashMap)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! Writes go to the log first and the index second; if the append fails the
//! index is untouched, so the two can never disagree. The index is a derived
//! cache that a fresh replay can always rebuild from the log alone.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod log;
pub mod index;
pub mod protocol;
pub mod engine;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EmberError, Result};
pub use config::Config;
pub use engine::Engine;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of EmberKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
