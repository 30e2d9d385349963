//! Flat-file storage layer
//!
//! The expense store is a plain delimited text file, loaded and rewritten
//! whole. `line` holds the codec, `expenses` the store operations.

pub mod expenses;
pub mod line;

pub use expenses::{ExpenseStore, LoadOutcome};
pub use line::{ParseWarning, SkipReason};
