//! Expense model
//!
//! An expense is a single monetary entry with a description, an amount, an
//! optional category label and the timestamp it was recorded at.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Textual timestamp layout stored in the `date` column (ISO-8601)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A stored expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the store
    pub id: ExpenseId,

    /// Free-form description
    pub description: String,

    /// Amount in currency units
    pub amount: Money,

    /// Optional category label
    pub category: Option<String>,

    /// When the expense was recorded
    pub created_at: NaiveDateTime,
}

impl Expense {
    /// Check whether this expense carries the given category (exact match)
    pub fn has_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
}

impl NewExpense {
    /// Create a new expense stamped with the current local time
    pub fn new(description: impl Into<String>, amount: Money, category: Option<String>) -> Self {
        Self::with_timestamp(description, amount, category, now())
    }

    /// Create a new expense with an explicit timestamp
    pub fn with_timestamp(
        description: impl Into<String>,
        amount: Money,
        category: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            created_at: created_at.trunc_subsecs(6),
        }
    }

    /// Attach the store-assigned id
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            created_at: self.created_at,
        }
    }
}

/// Current local time at the precision the store keeps
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Render a timestamp for the `date` column
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `date` column value
///
/// Accepts ISO-8601 with a `T` separator, with or without a fraction, and the
/// space-separated form older databases hold ("2025-01-15 09:05:00.123456").
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    s.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
}
