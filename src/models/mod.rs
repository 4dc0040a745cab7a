//! Defines the data structures and models used throughout the application.
//!
//! Currently this is the single `AdoptionRecord` struct representing one
//! registered animal and its adoption fee.

mod record;

pub use record::*;
