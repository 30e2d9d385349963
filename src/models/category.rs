//! Category configuration
//!
//! The category vocabulary is fixed per installation but injected rather than
//! compiled in: an ordered set of core spending labels plus two reserved
//! labels, one for the savings goal and one for money taken back out of
//! savings. The allocator and the summary engine both take a `CategorySet`,
//! so tests can run against alternate vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The set of category labels known to the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    /// Core spending categories, in display order
    core: Vec<String>,

    /// Reserved label for the savings goal
    savings: String,

    /// Reserved label for withdrawals from savings
    savings_use: String,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            core: vec![
                "🍔 Food".to_string(),
                "🏠 Home".to_string(),
                "💼 Work".to_string(),
                "🎉 Fun".to_string(),
                "✨ Misc".to_string(),
            ],
            savings: "💰 Savings".to_string(),
            savings_use: "❌ Savings_Use".to_string(),
        }
    }
}

impl CategorySet {
    /// Create a category set from explicit labels
    ///
    /// Returns an error if any label is blank, if there are no core labels,
    /// or if any two labels collide.
    pub fn new(
        core: Vec<String>,
        savings: impl Into<String>,
        savings_use: impl Into<String>,
    ) -> Result<Self, CategoryValidationError> {
        let set = Self {
            core,
            savings: savings.into(),
            savings_use: savings_use.into(),
        };
        set.validate()?;
        Ok(set)
    }

    /// Validate the label set
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.core.is_empty() {
            return Err(CategoryValidationError::NoCoreCategories);
        }

        let mut all: Vec<&str> = self.core.iter().map(String::as_str).collect();
        all.push(&self.savings);
        all.push(&self.savings_use);

        for label in &all {
            if label.trim().is_empty() {
                return Err(CategoryValidationError::EmptyLabel);
            }
        }

        for (i, label) in all.iter().enumerate() {
            if all[i + 1..].contains(label) {
                return Err(CategoryValidationError::DuplicateLabel(label.to_string()));
            }
        }

        Ok(())
    }

    /// Core spending labels in display order
    pub fn core(&self) -> &[String] {
        &self.core
    }

    /// Number of core spending categories (the allocation divisor)
    pub fn core_count(&self) -> usize {
        self.core.len()
    }

    /// The savings-goal label
    pub fn savings(&self) -> &str {
        &self.savings
    }

    /// The savings-withdrawal label
    pub fn savings_use(&self) -> &str {
        &self.savings_use
    }

    /// Check whether a label is one of the core spending categories
    pub fn is_core(&self, label: &str) -> bool {
        self.core.iter().any(|c| c == label)
    }
}

/// Validation errors for category sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    NoCoreCategories,
    EmptyLabel,
    DuplicateLabel(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCoreCategories => write!(f, "at least one core category is required"),
            Self::EmptyLabel => write!(f, "category labels cannot be blank"),
            Self::DuplicateLabel(label) => write!(f, "duplicate category label: {}", label),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
