//! Budget mapping model
//!
//! A per-session mapping from category label to budgeted amount. The mapping
//! always carries exactly one savings entry plus one entry per core spending
//! category, in a fixed iteration order (savings first, then the core labels
//! in display order). It can only be built against a validated
//! [`CategorySet`], which closes the key space at runtime.
//!
//! Not persisted across runs; callers re-derive it each session.

use std::fmt;

use super::category::CategorySet;
use super::money::Money;

/// One (category, budget) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    /// Category label
    pub category: String,
    /// Budgeted amount (non-negative)
    pub amount: Money,
}

/// Mapping from category label to budgeted amount, in iteration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetMapping {
    entries: Vec<BudgetEntry>,
    savings_label: String,
}

impl BudgetMapping {
    /// Create a mapping with explicit per-core amounts
    ///
    /// `core_amounts` pairs positionally with `categories.core()`.
    pub fn new(
        categories: &CategorySet,
        savings_goal: Money,
        core_amounts: Vec<Money>,
    ) -> Result<Self, BudgetValidationError> {
        if core_amounts.len() != categories.core_count() {
            return Err(BudgetValidationError::CoreCountMismatch {
                expected: categories.core_count(),
                got: core_amounts.len(),
            });
        }
        if savings_goal.is_negative() {
            return Err(BudgetValidationError::NegativeAmount(
                categories.savings().to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(core_amounts.len() + 1);
        entries.push(BudgetEntry {
            category: categories.savings().to_string(),
            amount: savings_goal,
        });
        for (label, amount) in categories.core().iter().zip(core_amounts) {
            if amount.is_negative() {
                return Err(BudgetValidationError::NegativeAmount(label.clone()));
            }
            entries.push(BudgetEntry {
                category: label.clone(),
                amount,
            });
        }

        Ok(Self {
            entries,
            savings_label: categories.savings().to_string(),
        })
    }

    /// Create a mapping where every core category gets the same amount
    pub fn uniform(
        categories: &CategorySet,
        savings_goal: Money,
        per_category: Money,
    ) -> Result<Self, BudgetValidationError> {
        Self::new(
            categories,
            savings_goal,
            vec![per_category; categories.core_count()],
        )
    }

    /// Entries in iteration order (savings first, then core labels)
    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    /// Look up the budget for a category label
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
    }

    /// Check whether a label has a budget entry
    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// The savings-goal entry
    pub fn savings_goal(&self) -> Money {
        // The savings entry always exists by construction.
        self.get(&self.savings_label).unwrap_or_else(Money::zero)
    }

    /// The savings label this mapping was built against
    pub fn savings_label(&self) -> &str {
        &self.savings_label
    }

    /// Sum of all budget values, savings included
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Number of entries (core categories + savings)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries (never true by construction)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validation errors for budget mappings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    CoreCountMismatch { expected: usize, got: usize },
    NegativeAmount(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoreCountMismatch { expected, got } => {
                write!(f, "expected {} core amounts, got {}", expected, got)
            }
            Self::NegativeAmount(label) => {
                write!(f, "budget for '{}' cannot be negative", label)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
