//! Budget CLI command
//!
//! Derives and prints the per-category budget for a session. The savings
//! goal comes first; the remainder is split evenly across the core
//! categories.

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{BudgetMapping, Money};
use crate::services::{allocate, suggested_savings_goal};

use super::expense::parse_amount;

/// Build the session budget from income and an optional savings goal
///
/// When no goal is given, the 20%-of-income guideline is used.
pub fn build_budget(
    settings: &Settings,
    income: &str,
    savings_goal: Option<&str>,
) -> TrackerResult<BudgetMapping> {
    let income = parse_amount(income)?;

    let savings_goal = match savings_goal {
        Some(raw) => Money::parse(raw)
            .map_err(|e| crate::error::TrackerError::validation(e.to_string()))?,
        None => suggested_savings_goal(income),
    };

    allocate(income, savings_goal, &settings.categories)
}

/// Handle the `budget` command: derive the mapping and print it
pub fn handle_budget(
    settings: &Settings,
    income: &str,
    savings_goal: Option<&str>,
) -> TrackerResult<()> {
    let parsed_income = parse_amount(income)?;
    let symbol = &settings.currency_symbol;

    if savings_goal.is_none() {
        println!(
            "Using the recommended savings goal (20% of income): {}",
            suggested_savings_goal(parsed_income).format_with_symbol(symbol)
        );
    }

    let mapping = build_budget(settings, income, savings_goal)?;

    println!("Budget for this session:");
    for entry in mapping.entries() {
        println!(
            "  {:<14} {}",
            entry.category,
            entry.amount.format_with_symbol(symbol)
        );
    }
    println!(
        "Total spending budget (excl. savings): {}",
        (mapping.total() - mapping.savings_goal()).format_with_symbol(symbol)
    );

    Ok(())
}
