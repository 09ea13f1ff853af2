//! Storage layer for expense-cli
//!
//! Provides SQLite storage with per-operation connections, transactional
//! writes and schema provisioning on startup.

pub mod connection;
pub mod expenses;
pub mod init;

pub use connection::open_connection;
pub use expenses::ExpenseRepository;
pub use init::{initialize_storage, needs_initialization};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator that provides access to the repository and audit log
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.database_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Create a Storage instance honoring the user's settings
    pub fn with_settings(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        let mut storage = Self::new(paths)?;
        if !settings.audit_enabled {
            storage.audit = None;
        }
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Ensure the schema exists; call once at process start
    pub fn initialize(&self) -> Result<(), ExpenseError> {
        initialize_storage(&self.paths)
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a newly added expense in the audit log
    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::create(expense))
    }

    /// Record an amount change in the audit log
    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::update(before, after))
    }

    /// Record a deletion in the audit log
    pub fn log_delete(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.log(AuditEntry::delete(expense))
    }

    fn log(&self, entry: AuditEntry) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money, NewExpense};
    use tempfile::TempDir;

    fn sample_expense() -> Expense {
        NewExpense::new("Coffee", Money::from_cents(350), None).into_expense(ExpenseId::new(1))
    }

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(!storage.paths().is_initialized());
        storage.initialize().unwrap();
        assert!(storage.paths().is_initialized());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_logging() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.log_create(&sample_expense()).unwrap();

        let logger = storage.audit_logger().unwrap();
        assert_eq!(logger.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_audit_disabled_by_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::with_settings(paths.clone(), &settings).unwrap();

        storage.log_delete(&sample_expense()).unwrap();

        assert!(storage.audit_logger().is_none());
        assert!(!paths.audit_log().exists());
    }
}
