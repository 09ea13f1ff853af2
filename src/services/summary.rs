//! Summary service
//!
//! Aggregates expense amounts overall and per calendar month. Months are
//! matched on month-of-year only, so March totals include every March.

use chrono::Month;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::storage::Storage;

/// Service for expense totals
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Sum of every stored amount
    pub fn total(&self) -> ExpenseResult<Money> {
        self.storage.expenses.sum_all()
    }

    /// Sum of amounts recorded in `month` of any year
    pub fn month_total(&self, month: Month) -> ExpenseResult<Money> {
        self.storage.expenses.sum_for_month(month.number_from_month())
    }
}

/// Parse a month number ("3", "03", "12") into a calendar month
///
/// Anything that is not an integer in 1-12 is an `InvalidMonth` error.
pub fn parse_month(input: &str) -> ExpenseResult<Month> {
    let number: u8 = input
        .trim()
        .parse()
        .map_err(|_| ExpenseError::InvalidMonth(input.to_string()))?;

    Month::try_from(number).map_err(|_| ExpenseError::InvalidMonth(input.to_string()))
}
