//! Core data models for expense-cli
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its identifier, and the money type.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
