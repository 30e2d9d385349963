//! Budget allocator
//!
//! Derives a per-category budget mapping from a total income figure and a
//! savings goal: the goal is set aside first, and whatever remains is split
//! evenly across the core spending categories. Pure and deterministic; the
//! interactive collection of the two figures lives in the CLI layer.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetMapping, CategorySet, Money};

/// Validate a total income figure: must be strictly positive
pub fn validate_income(income: Money) -> TrackerResult<()> {
    if !income.is_positive() {
        return Err(TrackerError::validation(format!(
            "income must be positive, got {}",
            income
        )));
    }
    Ok(())
}

/// Validate a savings goal against an income: must be in [0, income]
pub fn validate_savings_goal(income: Money, savings_goal: Money) -> TrackerResult<()> {
    if savings_goal.is_negative() {
        return Err(TrackerError::validation(format!(
            "savings goal must be non-negative, got {}",
            savings_goal
        )));
    }
    if savings_goal > income {
        return Err(TrackerError::validation(format!(
            "savings goal {} cannot exceed income {}",
            savings_goal, income
        )));
    }
    Ok(())
}

/// The 20%-of-income guideline surfaced when setting up a budget
pub fn suggested_savings_goal(income: Money) -> Money {
    income / 5
}

/// Derive a budget mapping from income and savings goal
///
/// The spending remainder (income minus goal) is divided evenly across the
/// core categories of `categories`. The division truncates; with the default
/// five categories at most 4 minor units go unallocated.
pub fn allocate(
    income: Money,
    savings_goal: Money,
    categories: &CategorySet,
) -> TrackerResult<BudgetMapping> {
    validate_income(income)?;
    validate_savings_goal(income, savings_goal)?;

    let remainder = income - savings_goal;
    let per_category = per_category_allocation(remainder, categories.core_count());

    BudgetMapping::uniform(categories, savings_goal, per_category)
        .map_err(|e| TrackerError::Budget(e.to_string()))
}

/// Even split of the spending remainder, clamped to zero when negative
///
/// A negative remainder cannot come out of `allocate`'s validation, but a
/// budget must never go negative regardless of how it is reached.
fn per_category_allocation(remainder: Money, core_count: usize) -> Money {
    if remainder.is_negative() || core_count == 0 {
        Money::zero()
    } else {
        remainder / core_count as i64
    }
}
