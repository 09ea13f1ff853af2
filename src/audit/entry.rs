//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense amount was changed
    Update,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected expense
    pub expense_id: ExpenseId,

    /// Description of the expense, for readability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The expense before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        expense: &Expense,
        before: Option<&Expense>,
        after: Option<&Expense>,
    ) -> Self {
        let snapshot = |e: &Expense| serde_json::to_value(e).ok();

        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: expense.id,
            description: Some(expense.description.clone()),
            before: before.and_then(snapshot),
            after: after.and_then(snapshot),
            diff_summary: None,
        }
    }

    /// Entry for a newly stored expense
    pub fn create(expense: &Expense) -> Self {
        Self::new(Operation::Create, expense, None, Some(expense))
    }

    /// Entry for an amount change
    pub fn update(before: &Expense, after: &Expense) -> Self {
        let mut entry = Self::new(Operation::Update, after, Some(before), Some(after));
        if before.amount != after.amount {
            entry.diff_summary = Some(format!("amount: {} -> {}", before.amount, after.amount));
        }
        entry
    }

    /// Entry for a deleted expense
    pub fn delete(expense: &Expense) -> Self {
        Self::new(Operation::Delete, expense, Some(expense), None)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Expense {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(description) = &self.description {
            output.push_str(&format!(" ({})", description));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
