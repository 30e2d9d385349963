//! CLI command handlers
//!
//! Each handler validates its inputs, talks to the store, and prints plain
//! text. Parse warnings from the store go to stderr so they never mix with
//! report output.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::handle_budget;
pub use expense::{handle_add, handle_delete, handle_list, handle_savings_use};
pub use report::{handle_summary, PeriodArgs};

use crate::storage::ParseWarning;

/// Print skipped-line warnings to stderr
pub fn print_warnings(warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}
