//! expense-cli - Terminal expense tracker
//!
//! This library provides the core functionality for the `expense` command:
//! recording expenses in a local SQLite database, listing and filtering them,
//! and summing totals overall or per calendar month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, IDs)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Table and summary formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::paths::ExpensePaths;
//! use expense_cli::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! storage.initialize()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
