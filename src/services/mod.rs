//! Business logic layer
//!
//! Pure services over the models: budget allocation and input validation.
//! The summarization engine lives in `reports`, next to its formatter.

pub mod allocator;

pub use allocator::{allocate, suggested_savings_goal, validate_income, validate_savings_goal};
