//! SQLite connection handling
//!
//! Connections are short-lived: every repository call opens one, does its
//! work and drops it before returning, on success and error paths alike.

use std::path::Path;

use rusqlite::Connection;

use crate::error::ExpenseError;

/// Open a connection to the database file at `path`
pub fn open_connection(path: &Path) -> Result<Connection, ExpenseError> {
    Connection::open(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })
}
