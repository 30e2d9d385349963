//! Expense record model
//!
//! A single spending event: a free-text label, a category label, a positive
//! amount, and a timestamp with second resolution.
//!
//! The timestamp is kept as the raw stored string rather than a parsed value:
//! a record whose timestamp does not parse is excluded from period filtering
//! but must survive a store rewrite byte for byte.

use chrono::NaiveDateTime;
use std::fmt;

use super::money::Money;

/// Timestamp rendering used in the store and in reports (24-hour, zero-padded)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The field separator of the persisted line format
pub const FIELD_SEPARATOR: char = ',';

/// A single expense record
///
/// Immutable once created; removal happens by rewriting the store without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Free-text label (non-empty)
    pub name: String,

    /// Category label, treated as an opaque key
    pub category: String,

    /// Positive amount
    pub amount: Money,

    /// Timestamp as stored ("YYYY-MM-DD HH:MM:SS" when well-formed)
    pub timestamp: String,
}

impl ExpenseRecord {
    /// Create a validated record with an explicit timestamp
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        timestamp: NaiveDateTime,
    ) -> Result<Self, ExpenseValidationError> {
        let record = Self {
            name: name.into(),
            category: category.into(),
            amount,
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Build a record from already-persisted parts, without validation
    ///
    /// Used by the store loader: legacy lines are accepted as-is, including
    /// timestamps that no longer parse.
    pub fn from_stored(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            timestamp: timestamp.into(),
        }
    }

    /// Validate a record before it is written
    ///
    /// The persisted format has no escaping, so a separator inside a field
    /// would corrupt the line on reload; reject it up front.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.name.contains(FIELD_SEPARATOR) {
            return Err(ExpenseValidationError::SeparatorInField("name"));
        }
        if self.category.contains(FIELD_SEPARATOR) {
            return Err(ExpenseValidationError::SeparatorInField("category"));
        }
        Ok(())
    }

    /// The timestamp as a date-time, if it is well-formed
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.timestamp, self.category, self.amount, self.name
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount(Money),
    SeparatorInField(&'static str),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "expense name cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "expense amount must be positive, got {}", amount)
            }
            Self::SeparatorInField(field) => {
                write!(f, "{} cannot contain the field separator ','", field)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
