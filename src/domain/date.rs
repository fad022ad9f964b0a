//! Due-date value type and calendar validation
//!
//! Dates are plain day/month/year triples with no timezone semantics.
//! Validation intentionally uses a simplified leap-year rule (divisible
//! by four, no century exception) and a configurable minimum year below
//! which all dates are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Days per month for a non-leap year, indexed by `month - 1`
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date for task due dates
///
/// Immutable once constructed; validity is checked separately via
/// [`Date::is_valid`] so that callers can build a `Date` from raw input
/// and let the store reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl Date {
    /// Creates a date from day/month/year components
    pub fn new(day: u8, month: u8, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Checks this date against the calendar policy
    ///
    /// Rejects years before `min_year`, months outside 1-12, and days
    /// outside the month's range. February allows 29 days when the year
    /// is divisible by 4 (simplified rule, no century exception).
    pub fn is_valid(&self, min_year: i32) -> bool {
        if self.year < min_year || self.month < 1 || self.month > 12 {
            return false;
        }
        if self.day < 1 {
            return false;
        }

        let max_day = if self.month == 2 && self.year % 4 == 0 {
            29
        } else {
            DAYS_IN_MONTH[(self.month - 1) as usize]
        };

        self.day <= max_day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}
