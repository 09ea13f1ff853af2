//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and totals for terminal display.

pub mod expense;

pub use expense::{
    format_expense_table, format_expense_table_with, format_month_summary, format_total_summary,
    TableStyle,
};
