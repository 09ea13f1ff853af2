//! Service layer for expense-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, not-found checks and aggregation.

pub mod expense;
pub mod summary;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use summary::{parse_month, SummaryService};
