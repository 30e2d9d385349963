//! Expense CLI commands
//!
//! Handlers for recording, listing, and deleting expenses, and for logging
//! withdrawals from savings. Input validation happens here; the store only
//! sees well-formed records.

use chrono::Local;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseRecord, Money};
use crate::storage::ExpenseStore;

use super::print_warnings;

/// Add a new expense to the store
///
/// `category` is either a category label or a 1-based position in the core
/// category list.
pub fn handle_add(
    store: &ExpenseStore,
    settings: &Settings,
    name: &str,
    amount: &str,
    category: &str,
) -> TrackerResult<()> {
    let amount = parse_amount(amount)?;
    let category = resolve_category(settings, category)?;

    let record = ExpenseRecord::new(name, category, amount, Local::now().naive_local())
        .map_err(|e| TrackerError::validation(e.to_string()))?;

    store.append(&record)?;
    println!(
        "Recorded {} under {} ({})",
        record.amount.format_with_symbol(&settings.currency_symbol),
        record.category,
        record.name
    );
    Ok(())
}

/// List all stored expenses with their 1-based positions
pub fn handle_list(store: &ExpenseStore, settings: &Settings) -> TrackerResult<()> {
    let outcome = store.load()?;
    print_warnings(&outcome.warnings);

    if outcome.records.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    for (i, record) in outcome.records.iter().enumerate() {
        let date = record.timestamp.chars().take(10).collect::<String>();
        println!(
            "{:>3}. {} | {:<14} | {:>10} | {}",
            i + 1,
            date,
            record.category,
            record.amount.format_with_symbol(&settings.currency_symbol),
            record.name
        );
    }
    Ok(())
}

/// Delete the expense at a 1-based position; 'c' cancels without touching
/// the store
pub fn handle_delete(store: &ExpenseStore, selection: &str) -> TrackerResult<()> {
    if selection.eq_ignore_ascii_case("c") {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let index: usize = selection
        .parse()
        .map_err(|_| TrackerError::validation("enter a record number or 'c' to cancel"))?;

    let removed = store.delete(index)?;
    println!("Deleted: {}", removed.name);
    Ok(())
}

/// Record an amount taken out of savings, with a reason
pub fn handle_savings_use(
    store: &ExpenseStore,
    settings: &Settings,
    amount: &str,
    reason: &str,
) -> TrackerResult<()> {
    let amount = parse_amount(amount)?;

    let record = ExpenseRecord::new(
        format!("Used for: {}", reason),
        settings.categories.savings_use(),
        amount,
        Local::now().naive_local(),
    )
    .map_err(|e| TrackerError::validation(e.to_string()))?;

    store.append(&record)?;
    println!(
        "Recorded {} used from savings for '{}'",
        record.amount.format_with_symbol(&settings.currency_symbol),
        reason
    );
    Ok(())
}

/// Parse a positive amount argument
pub(crate) fn parse_amount(raw: &str) -> TrackerResult<Money> {
    let amount = Money::parse(raw).map_err(|e| TrackerError::validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(TrackerError::validation(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Resolve a category argument to a core label
///
/// Accepts the label itself or its 1-based position in the core list.
fn resolve_category(settings: &Settings, raw: &str) -> TrackerResult<String> {
    let core = settings.categories.core();

    if let Ok(position) = raw.trim().parse::<usize>() {
        return core
            .get(position.wrapping_sub(1))
            .cloned()
            .ok_or_else(|| TrackerError::InvalidSelection {
                index: position,
                len: core.len(),
            });
    }

    if settings.categories.is_core(raw) {
        return Ok(raw.to_string());
    }

    Err(TrackerError::validation(format!(
        "unknown category '{}'; choose one of: {}",
        raw,
        core.join(", ")
    )))
}
