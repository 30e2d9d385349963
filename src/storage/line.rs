//! Line codec for the expense store
//!
//! One record per line, fields separated by commas, in fixed order
//! `name,amount,category,timestamp`. Amounts render with exactly two
//! fractional digits. Field values are written verbatim with no escaping;
//! record validation keeps separators out of new data, and legacy lines are
//! parsed as-is.

use chrono::NaiveDateTime;
use std::fmt;

use crate::models::{ExpenseRecord, Money, FIELD_SEPARATOR, TIMESTAMP_FORMAT};

/// Why a stored line was skipped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than 3 comma-separated fields
    TooFewFields,
    /// Amount field did not parse as a decimal
    BadAmount(String),
}

/// A non-fatal warning for a line that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number in the store
    pub line_number: usize,
    /// The offending line, verbatim
    pub line: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            SkipReason::TooFewFields => write!(
                f,
                "Skipping line {} with too few fields: {}",
                self.line_number, self.line
            ),
            SkipReason::BadAmount(amount) => write!(
                f,
                "Skipping line {} with malformed amount '{}': {}",
                self.line_number, amount, self.line
            ),
        }
    }
}

/// Parse one stored line into a record
///
/// A line must split into at least 3 fields (name, amount, category); a 4th
/// field, if present, is the timestamp. A missing timestamp defaults to
/// `now`. Anything past the 4th separator is dropped, matching the fixed
/// field order of the format.
pub fn parse_line(
    line: &str,
    line_number: usize,
    now: NaiveDateTime,
) -> Result<ExpenseRecord, ParseWarning> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    if parts.len() < 3 {
        return Err(ParseWarning {
            line_number,
            line: line.to_string(),
            reason: SkipReason::TooFewFields,
        });
    }

    let amount = Money::parse(parts[1]).map_err(|_| ParseWarning {
        line_number,
        line: line.to_string(),
        reason: SkipReason::BadAmount(parts[1].to_string()),
    })?;

    let timestamp = match parts.get(3) {
        Some(raw) => raw.to_string(),
        None => now.format(TIMESTAMP_FORMAT).to_string(),
    };

    Ok(ExpenseRecord::from_stored(parts[0], parts[2], amount, timestamp))
}

/// Render a record as one stored line (no trailing newline)
pub fn render_line(record: &ExpenseRecord) -> String {
    format!(
        "{name}{sep}{amount}{sep}{category}{sep}{timestamp}",
        name = record.name,
        amount = record.amount,
        category = record.category,
        timestamp = record.timestamp,
        sep = FIELD_SEPARATOR,
    )
}
