//! Expense summary report
//!
//! The summarization engine: filters records by period, aggregates spend per
//! budgeted category, tracks savings withdrawals, and projects a daily
//! spending limit when the report covers the live month. The report is a
//! pure function of the records, the budget mapping, the filter, and the
//! supplied `today`; rendering is a separate concern.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::models::{days_in_month, BudgetMapping, CategorySet, ExpenseRecord, Money, PeriodFilter};

/// Width of the utilization bar in the terminal rendering
const BAR_LENGTH: usize = 30;

/// Budget-vs-actual for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// Category label
    pub category: String,
    /// Budgeted amount
    pub budget: Money,
    /// Spent amount in the period
    pub spent: Money,
    /// Budget minus spent (negative when overspent)
    pub remaining: Money,
    /// Spent as a fraction of budget; 0 when the budget is 0
    pub utilization: f64,
    /// Whether spending exceeded the budget
    pub over_budget: bool,
}

/// Daily spending projection for the live month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyProjection {
    /// Days left in the month, today included
    pub remaining_days: u32,
    /// Remaining spending budget spread over the remaining days
    pub daily_limit: Money,
}

/// Budget-vs-actual summary for a period
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// The period this report covers
    pub period: PeriodFilter,
    /// Per-category rows, in budget-mapping order
    pub rows: Vec<CategoryRow>,
    /// Sum of all budget values, savings included
    pub total_budget: Money,
    /// Sum of all per-category spending (savings withdrawals excluded)
    pub total_spent: Money,
    /// Total withdrawn from savings in the period
    pub savings_withdrawn: Money,
    /// The savings allocation the budget started with
    pub initial_savings_goal: Money,
    /// Initial goal minus withdrawals; negative signals over-withdrawal
    pub adjusted_savings_goal: Money,
    /// Spending budget (total minus savings) left after spending
    pub remaining_spending_budget: Money,
    /// Daily-limit projection, present only for the live month
    pub daily: Option<DailyProjection>,
}

impl SummaryReport {
    /// Generate a summary, or `None` when the period holds no records
    ///
    /// Records with unparseable timestamps are excluded from this pass only;
    /// they stay in the store. Records whose category is neither budgeted
    /// nor the savings-use label contribute to neither bucket, which keeps
    /// legacy labels harmless.
    pub fn generate(
        records: &[ExpenseRecord],
        budget: &BudgetMapping,
        categories: &CategorySet,
        filter: PeriodFilter,
        today: NaiveDate,
    ) -> Option<Self> {
        let filtered: Vec<&ExpenseRecord> = records
            .iter()
            .filter(|r| r.parsed_timestamp().map_or(false, |ts| filter.matches(ts)))
            .collect();

        if filtered.is_empty() {
            return None;
        }

        let mut spent_by_category: HashMap<&str, Money> = budget
            .entries()
            .iter()
            .map(|e| (e.category.as_str(), Money::zero()))
            .collect();
        let mut savings_withdrawn = Money::zero();

        for record in &filtered {
            if let Some(total) = spent_by_category.get_mut(record.category.as_str()) {
                *total += record.amount;
            } else if record.category == categories.savings_use() {
                savings_withdrawn += record.amount;
            }
            // Any other label is ignored on purpose.
        }

        let rows: Vec<CategoryRow> = budget
            .entries()
            .iter()
            .map(|entry| {
                let spent = spent_by_category
                    .get(entry.category.as_str())
                    .copied()
                    .unwrap_or_else(Money::zero);
                let remaining = entry.amount - spent;
                CategoryRow {
                    category: entry.category.clone(),
                    budget: entry.amount,
                    spent,
                    remaining,
                    utilization: spent.ratio_of(entry.amount),
                    over_budget: remaining.is_negative(),
                }
            })
            .collect();

        let total_budget = budget.total();
        let total_spent: Money = rows.iter().map(|r| r.spent).sum();

        let initial_savings_goal = budget.savings_goal();
        let adjusted_savings_goal = initial_savings_goal - savings_withdrawn;

        let total_spending_budget = total_budget - initial_savings_goal;
        let remaining_spending_budget = total_spending_budget - total_spent;

        let daily = if filter.is_current_month(today) {
            let total_days = days_in_month(today.year(), today.month());
            let remaining_days = total_days.saturating_sub(today.day()) + 1;
            Some(DailyProjection {
                remaining_days,
                daily_limit: daily_limit(remaining_spending_budget, remaining_days),
            })
        } else {
            None
        };

        Some(Self {
            period: filter,
            rows,
            total_budget,
            total_spent,
            savings_withdrawn,
            initial_savings_goal,
            adjusted_savings_goal,
            remaining_spending_budget,
            daily,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Expense Summary — {}\n", self.period));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let filled = (BAR_LENGTH as f64 * row.utilization.min(1.0)) as usize;
            let bar: String = if row.over_budget {
                "█".repeat(BAR_LENGTH)
            } else {
                format!("{}{}", "█".repeat(filled), "-".repeat(BAR_LENGTH - filled))
            };
            let marker = if row.over_budget { " OVER" } else { "" };

            output.push_str(&format!(
                "  {:<14} {:>10}/{:<10} |{}| {:>5.1}%{}\n",
                row.category,
                row.spent.format_with_symbol(symbol),
                row.budget.format_with_symbol(symbol),
                bar,
                row.utilization * 100.0,
                marker,
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget: {}\n",
            self.total_budget.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Spent:  {}\n",
            self.total_spent.format_with_symbol(symbol)
        ));

        output.push_str(&format!(
            "Initial Savings Goal: {}\n",
            self.initial_savings_goal.format_with_symbol(symbol)
        ));
        if self.savings_withdrawn.is_positive() {
            output.push_str(&format!(
                "Used from Savings:    {}\n",
                self.savings_withdrawn.format_with_symbol(symbol)
            ));
        }
        output.push_str(&format!(
            "Adjusted Savings Goal: {}\n",
            self.adjusted_savings_goal.format_with_symbol(symbol)
        ));

        output.push_str(&format!(
            "Spending Left (excl. savings): {}\n",
            self.remaining_spending_budget.format_with_symbol(symbol)
        ));

        if let Some(daily) = &self.daily {
            output.push_str(&format!(
                "Daily Spending Limit ({} days left): {}\n",
                daily.remaining_days,
                daily.daily_limit.format_with_symbol(symbol)
            ));
        }

        output
    }
}

/// Remaining budget spread over the remaining days
///
/// Falls back to the full remaining budget when no days are left, so the
/// projection stays finite at the very end of a month.
fn daily_limit(remaining_spending_budget: Money, remaining_days: u32) -> Money {
    if remaining_days > 0 {
        remaining_spending_budget / remaining_days as i64
    } else {
        remaining_spending_budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, minor: i64, category: &str, timestamp: &str) -> ExpenseRecord {
        ExpenseRecord::from_stored(name, category, Money::from_minor(minor), timestamp)
    }

    fn scenario_budget(categories: &CategorySet) -> BudgetMapping {
        // Food/Home budgeted, remaining core categories at zero
        BudgetMapping::new(
            categories,
            Money::from_units(1000),
            vec![
                Money::from_units(200), // 🍔 Food
                Money::from_units(500), // 🏠 Home
                Money::zero(),
                Money::zero(),
                Money::zero(),
            ],
        )
        .unwrap()
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_scenario_category_breakdown() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![
            record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00"),
            record("Rent", 50000, "🏠 Home", "2024-03-01 09:00:00"),
        ];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
        .unwrap();

        let food = report.rows.iter().find(|r| r.category == "🍔 Food").unwrap();
        assert_eq!(food.spent, Money::from_units(150));
        assert_eq!(food.remaining, Money::from_units(50));
        assert!((food.utilization - 0.75).abs() < 1e-9);
        assert!(!food.over_budget);

        let home = report.rows.iter().find(|r| r.category == "🏠 Home").unwrap();
        assert_eq!(home.spent, Money::from_units(500));
        assert!((home.utilization - 1.0).abs() < 1e-9);
        assert!(!home.over_budget);

        assert_eq!(report.total_spent, Money::from_units(650));
        assert_eq!(report.total_budget, Money::from_units(1700));
        // Not the live month, so no daily projection
        assert_eq!(report.daily, None);
    }

    #[test]
    fn test_savings_use_adjusts_goal_and_stays_out_of_spent() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![
            record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00"),
            record(
                "Used for: Car Repair",
                30000,
                "❌ Savings_Use",
                "2024-03-10 08:00:00",
            ),
        ];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        assert_eq!(report.savings_withdrawn, Money::from_units(300));
        assert_eq!(report.initial_savings_goal, Money::from_units(1000));
        assert_eq!(report.adjusted_savings_goal, Money::from_units(700));
        assert_eq!(report.total_spent, Money::from_units(150));
    }

    #[test]
    fn test_over_withdrawal_goes_negative() {
        let categories = CategorySet::default();
        let budget = BudgetMapping::uniform(
            &categories,
            Money::from_units(100),
            Money::from_units(100),
        )
        .unwrap();
        let records = vec![record(
            "Used for: Emergency",
            25000,
            "❌ Savings_Use",
            "2024-03-10 08:00:00",
        )];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        assert_eq!(report.adjusted_savings_goal, Money::from_units(-150));
    }

    #[test]
    fn test_no_data_for_period() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00")];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(4, 2024).unwrap(),
            march_15(),
        );
        assert!(report.is_none());
    }

    #[test]
    fn test_malformed_timestamp_excluded() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![
            record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00"),
            record("Mystery", 99900, "🍔 Food", "not-a-date"),
        ];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        assert_eq!(report.total_spent, Money::from_units(150));
    }

    #[test]
    fn test_unknown_category_ignored() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![
            record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00"),
            record("Legacy", 5000, "Old Label", "2024-03-06 12:00:00"),
        ];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        assert_eq!(report.total_spent, Money::from_units(150));
        assert_eq!(report.savings_withdrawn, Money::zero());
    }

    #[test]
    fn test_zero_budget_category() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![record("Gadget", 4200, "💼 Work", "2024-03-05 12:00:00")];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        let work = report.rows.iter().find(|r| r.category == "💼 Work").unwrap();
        assert_eq!(work.utilization, 0.0);
        assert_eq!(work.remaining, Money::from_minor(-4200));
        assert!(work.over_budget);
    }

    #[test]
    fn test_daily_limit_for_live_month() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00")];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        // March has 31 days; on the 15th, 17 remain (today included)
        let daily = report.daily.unwrap();
        assert_eq!(daily.remaining_days, 17);
        // Spending budget 700 minus 150 spent, spread over 17 days
        assert_eq!(
            daily.daily_limit,
            (Money::from_units(550)) / 17
        );
    }

    #[test]
    fn test_daily_limit_zero_days_fallback() {
        let remaining = Money::from_units(550);
        assert_eq!(daily_limit(remaining, 0), remaining);
        assert_eq!(daily_limit(remaining, 1), remaining);
    }

    #[test]
    fn test_idempotent() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![
            record("Lunch", 15000, "🍔 Food", "2024-03-05 12:00:00"),
            record("Rent", 50000, "🏠 Home", "2024-03-01 09:00:00"),
        ];
        let filter = PeriodFilter::month_year(3, 2024).unwrap();

        let first = SummaryReport::generate(&records, &budget, &categories, filter, march_15());
        let second = SummaryReport::generate(&records, &budget, &categories, filter, march_15());
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_terminal_marks_over_budget() {
        let categories = CategorySet::default();
        let budget = scenario_budget(&categories);
        let records = vec![record("Splurge", 30000, "🍔 Food", "2024-03-05 12:00:00")];

        let report = SummaryReport::generate(
            &records,
            &budget,
            &categories,
            PeriodFilter::month_year(3, 2024).unwrap(),
            march_15(),
        )
        .unwrap();

        let rendered = report.format_terminal("₹");
        assert!(rendered.contains("OVER"));
        assert!(rendered.contains("March 2024"));
        assert!(rendered.contains("Daily Spending Limit"));
    }
}
