//! Expense display formatting
//!
//! Renders expense listings as fixed-column tables and formats total lines.
//! Column widths are derived from the records being rendered on every call.

use std::fmt::Write;

use chrono::{Month, NaiveDateTime};

use crate::config::settings::Settings;
use crate::models::expense::TIMESTAMP_FORMAT;
use crate::models::{Expense, Money};

const HEADERS: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];

/// Rendering options for the expense table
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Prefix for amounts
    pub currency_symbol: String,
    /// strftime format of the Date column
    pub date_format: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl From<&Settings> for TableStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

/// Format expenses as a table with the default style
pub fn format_expense_table(expenses: &[Expense]) -> String {
    format_expense_table_with(expenses, &TableStyle::default())
}

/// Format expenses as a table
///
/// Each column is as wide as the longer of its header and its longest value.
/// An empty slice renders the header row alone.
pub fn format_expense_table_with(expenses: &[Expense], style: &TableStyle) -> String {
    let rows: Vec<[String; 5]> = expenses
        .iter()
        .map(|expense| {
            [
                expense.id.to_string(),
                render_date(&expense.created_at, &style.date_format),
                expense.description.clone(),
                expense.amount.format_with_symbol(&style.currency_symbol),
                expense.category.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }

    output
}

fn push_row<S: AsRef<str>>(output: &mut String, cells: &[S; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect::<Vec<_>>()
        .join(" ");
    output.push_str(&line);
    output.push('\n');
}

/// Render a timestamp, falling back to ISO-8601 if the format is invalid
fn render_date(ts: &NaiveDateTime, date_format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", ts.format(date_format)).is_err() {
        return ts.format(TIMESTAMP_FORMAT).to_string();
    }
    rendered
}

/// "Total expenses for March: $12.50"
pub fn format_month_summary(month: Month, total: Money, currency_symbol: &str) -> String {
    format!(
        "Total expenses for {}: {}",
        month.name(),
        total.format_with_symbol(currency_symbol)
    )
}

/// "Total expenses: $12.50"
pub fn format_total_summary(total: Money, currency_symbol: &str) -> String {
    format!("Total expenses: {}", total.format_with_symbol(currency_symbol))
}
