//! Summary CLI command
//!
//! Loads the store, derives the session budget, and prints the
//! budget-vs-actual summary for the requested period.

use chrono::{Datelike, Local, NaiveDate};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::PeriodFilter;
use crate::reports::SummaryReport;
use crate::storage::ExpenseStore;

use super::budget::build_budget;
use super::print_warnings;

/// Arguments selecting the summary period
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodArgs {
    /// Month 1-12; defaults to the current month
    pub month: Option<u32>,
    /// Year; defaults to the current year
    pub year: Option<i32>,
    /// Summarize every record, ignoring month and year
    pub all: bool,
}

impl PeriodArgs {
    /// Resolve to a concrete filter, filling gaps from `today`
    pub fn resolve(&self, today: NaiveDate) -> TrackerResult<PeriodFilter> {
        if self.all {
            return Ok(PeriodFilter::all());
        }
        let month = self.month.unwrap_or_else(|| today.month());
        let year = self.year.unwrap_or_else(|| today.year());
        PeriodFilter::month_year(month, year)
            .map_err(|e| TrackerError::validation(e.to_string()))
    }
}

/// Handle the `summary` command
pub fn handle_summary(
    store: &ExpenseStore,
    settings: &Settings,
    income: &str,
    savings_goal: Option<&str>,
    period: PeriodArgs,
) -> TrackerResult<()> {
    let budget = build_budget(settings, income, savings_goal)?;

    let today = Local::now().date_naive();
    let filter = period.resolve(today)?;

    let outcome = store.load()?;
    print_warnings(&outcome.warnings);

    match SummaryReport::generate(
        &outcome.records,
        &budget,
        &settings.categories,
        filter,
        today,
    ) {
        Some(report) => print!("{}", report.format_terminal(&settings.currency_symbol)),
        None => println!("No expenses found for {}.", filter),
    }

    Ok(())
}
