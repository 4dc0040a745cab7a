//! Provides the in-memory adoption record store.
//!
//! All storage lives in the `records` submodule; nothing here persists
//! beyond the process.

mod records;

pub use records::*;
