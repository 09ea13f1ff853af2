//! Storage initialization
//!
//! Provisions the `Expenses` table on first run. Safe to call on every start:
//! the DDL only creates what is missing and never alters existing rows.

use rusqlite::{Connection, OptionalExtension};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

use super::connection::open_connection;

/// Name of the expense table
pub const EXPENSES_TABLE: &str = "Expenses";

const CREATE_EXPENSES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS Expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL,
        amount REAL,
        date TEXT,
        category TEXT
    );
";

/// Ensure the database file and schema exist
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    let conn = open_connection(&paths.database_file())?;
    ensure_schema(&conn)?;

    tracing::debug!(path = %paths.database_file().display(), "schema ensured");
    Ok(())
}

/// Run the idempotent DDL on an open connection
pub fn ensure_schema(conn: &Connection) -> Result<(), ExpenseError> {
    conn.execute_batch(CREATE_EXPENSES_TABLE)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create schema: {}", e)))
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> Result<bool, ExpenseError> {
    if !paths.database_file().exists() {
        return Ok(true);
    }

    let conn = open_connection(&paths.database_file())?;
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [EXPENSES_TABLE],
            |row| row.get(0),
        )
        .optional()?;

    Ok(found.is_none())
}
