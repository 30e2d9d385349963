//! Derived reports
//!
//! Reports are pure values generated from the store and a budget mapping,
//! each carrying its own terminal formatter.

pub mod summary;

pub use summary::{CategoryRow, DailyProjection, SummaryReport};
