//! Core data models for spendlog
//!
//! This module contains the data structures the tracker is built on:
//! money, expense records, the category vocabulary, budget mappings, and
//! reporting periods.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use budget::{BudgetEntry, BudgetMapping, BudgetValidationError};
pub use category::{CategorySet, CategoryValidationError};
pub use expense::{ExpenseRecord, ExpenseValidationError, FIELD_SEPARATOR, TIMESTAMP_FORMAT};
pub use money::{Money, MoneyParseError};
pub use period::{days_in_month, InvalidMonth, PeriodFilter};
