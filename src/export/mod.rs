//! Export module for expense-cli
//!
//! Provides data export in two formats:
//! - CSV: spreadsheet-compatible expense rows
//! - JSON: machine-readable export with schema versioning

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
