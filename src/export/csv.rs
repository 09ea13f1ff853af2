//! CSV Export functionality
//!
//! Writes every expense as one CSV row in insertion order.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::format_timestamp;
use crate::storage::Storage;

/// Export all expenses to CSV, returning the number of rows written
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseResult<usize> {
    let expenses = storage.expenses.get_all(None)?;

    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Description", "Amount", "Category"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in &expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                format_timestamp(&expense.created_at),
                expense.description.clone(),
                expense.amount.format_plain(),
                expense.category.clone().unwrap_or_default(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(expenses.len())
}
