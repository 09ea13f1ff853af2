//! JSON Export functionality
//!
//! Exports every expense with schema versioning and a small summary block.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full expense export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    /// Number of exported expenses
    pub expense_count: usize,

    /// Sum of all exported amounts, in cents
    pub total: Money,
}

impl ExpenseExport {
    /// Build an export from storage
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all(None)?;
        let total = expenses.iter().map(|e| e.amount).sum();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            expenses,
            total,
        })
    }
}

/// Export all expenses to JSON, returning the number exported
pub fn export_expenses_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<usize> {
    let export = ExpenseExport::from_storage(storage)?;

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.expense_count)
}
