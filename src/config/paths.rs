//! Path management for expense-cli
//!
//! All files live in the process's working directory under fixed names, so
//! running the tool from a different directory addresses a different store.

use std::path::PathBuf;

use crate::error::ExpenseError;

/// SQLite database file name
pub const DATABASE_FILE: &str = "expense_storage.db";

/// Settings file name
pub const SETTINGS_FILE: &str = "expense_config.json";

/// Audit log file name
pub const AUDIT_LOG_FILE: &str = "expense_audit.log";

/// Manages all paths used by expense-cli
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the database, settings and audit log
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths relative to the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = std::env::current_dir().map_err(|e| {
            ExpenseError::Config(format!("Could not determine working directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join(DATABASE_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_LOG_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if a database has been created here
    pub fn is_initialized(&self) -> bool {
        self.database_file().exists()
    }
}
