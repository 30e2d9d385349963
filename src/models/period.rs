//! Reporting period filter
//!
//! Summaries can be restricted to a calendar month, a year, or left open.
//! The filter also decides whether the daily-limit projection applies: only
//! when the requested period is the live month.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt;

/// Optional month/year restriction for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodFilter {
    /// Calendar month (1-12), or None for any month
    pub month: Option<u32>,
    /// Calendar year, or None for any year
    pub year: Option<i32>,
}

impl PeriodFilter {
    /// No restriction: every record matches
    pub const fn all() -> Self {
        Self {
            month: None,
            year: None,
        }
    }

    /// Restrict to a specific month and year
    pub fn month_year(month: u32, year: i32) -> Result<Self, InvalidMonth> {
        if !(1..=12).contains(&month) {
            return Err(InvalidMonth(month));
        }
        Ok(Self {
            month: Some(month),
            year: Some(year),
        })
    }

    /// The month and year of `today`
    pub fn current(today: NaiveDate) -> Self {
        Self {
            month: Some(today.month()),
            year: Some(today.year()),
        }
    }

    /// Check whether a timestamp falls inside this period
    pub fn matches(&self, timestamp: NaiveDateTime) -> bool {
        let month_match = self.month.map_or(true, |m| timestamp.month() == m);
        let year_match = self.year.map_or(true, |y| timestamp.year() == y);
        month_match && year_match
    }

    /// Check whether this filter names the live month
    pub fn is_current_month(&self, today: NaiveDate) -> bool {
        self.month == Some(today.month()) && self.year == Some(today.year())
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.year) {
            (Some(m), Some(y)) => match NaiveDate::from_ymd_opt(y, m, 1) {
                Some(first) => write!(f, "{}", first.format("%B %Y")),
                None => write!(f, "{}-{:02}", y, m),
            },
            (Some(m), None) => write!(f, "month {}", m),
            (None, Some(y)) => write!(f, "{}", y),
            (None, None) => write!(f, "all records"),
        }
    }
}

/// Number of calendar days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return 30,
    };
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_month {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 30,
    }
}

/// Error for out-of-range month values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMonth(pub u32);

impl fmt::Display for InvalidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month must be 1-12, got {}", self.0)
    }
}

impl std::error::Error for InvalidMonth {}
