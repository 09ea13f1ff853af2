//! Configuration module for expense-cli
//!
//! This module provides configuration management including:
//! - Working-directory path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
