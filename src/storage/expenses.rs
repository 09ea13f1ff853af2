//! Expense repository for SQLite storage
//!
//! Raw CRUD and aggregate queries over the `Expenses` table. Validation lives
//! in the service layer; this layer only maps rows to typed records.

use std::path::PathBuf;

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::ExpenseError;
use crate::models::expense::{format_timestamp, parse_timestamp};
use crate::models::{Expense, ExpenseId, Money, NewExpense};

use super::connection::open_connection;

const SELECT_COLUMNS: &str = "SELECT id, description, amount, date, category FROM Expenses";

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository for the database at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn connect(&self) -> Result<Connection, ExpenseError> {
        open_connection(&self.path)
    }

    /// Insert an expense and return its new id
    pub fn insert(&self, expense: &NewExpense) -> Result<ExpenseId, ExpenseError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO Expenses (description, amount, date, category) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.description,
                expense.amount.units(),
                format_timestamp(&expense.created_at),
                expense.category,
            ],
        )?;
        let id = ExpenseId::new(tx.last_insert_rowid());

        tx.commit()?;

        tracing::debug!(%id, amount = %expense.amount, "inserted expense");
        Ok(id)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let conn = self.connect()?;

        let expense = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id.value()],
                row_to_expense,
            )
            .optional()?;

        Ok(expense)
    }

    /// Get all expenses in insertion order, optionally limited to one category
    pub fn get_all(&self, category: Option<&str>) -> Result<Vec<Expense>, ExpenseError> {
        let conn = self.connect()?;

        let expenses = match category {
            Some(category) => {
                let mut stmt = conn.prepare(&format!(
                    "{} WHERE category = ?1 ORDER BY id ASC",
                    SELECT_COLUMNS
                ))?;
                let rows = stmt.query_map(params![category], row_to_expense)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;
                let rows = stmt.query_map([], row_to_expense)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(expenses)
    }

    /// Overwrite the amount of an expense
    ///
    /// Returns false if no row has this id.
    pub fn update_amount(&self, id: ExpenseId, amount: Money) -> Result<bool, ExpenseError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let changed = tx.execute(
            "UPDATE Expenses SET amount = ?1 WHERE id = ?2",
            params![amount.units(), id.value()],
        )?;

        tx.commit()?;

        tracing::debug!(%id, %amount, changed, "updated expense amount");
        Ok(changed > 0)
    }

    /// Delete an expense
    ///
    /// Returns false if no row has this id.
    pub fn delete(&self, id: ExpenseId) -> Result<bool, ExpenseError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let removed = tx.execute("DELETE FROM Expenses WHERE id = ?1", params![id.value()])?;

        tx.commit()?;

        tracing::debug!(%id, removed, "deleted expense");
        Ok(removed > 0)
    }

    /// Sum of all amounts ($0.00 when empty)
    pub fn sum_all(&self) -> Result<Money, ExpenseError> {
        let conn = self.connect()?;

        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM Expenses",
            [],
            |row| row.get(0),
        )?;

        Ok(Money::from_units(total))
    }

    /// Sum of amounts recorded in the given month of any year
    ///
    /// `month` must already be validated to 1-12.
    pub fn sum_for_month(&self, month: u32) -> Result<Money, ExpenseError> {
        let conn = self.connect()?;

        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM Expenses WHERE strftime('%m', date) = ?1",
            params![format!("{:02}", month)],
            |row| row.get(0),
        )?;

        Ok(Money::from_units(total))
    }

    /// Count stored expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let conn = self.connect()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM Expenses", [], |row| row.get(0))?;

        Ok(count as usize)
    }
}

/// Map a row of `SELECT_COLUMNS` to an expense
fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let amount: Option<f64> = row.get(2)?;
    let date: Option<String> = row.get(3)?;

    let created_at = match date {
        Some(text) => parse_timestamp(&text)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
        None => return Err(rusqlite::Error::InvalidColumnType(3, "date".into(), Type::Null)),
    };

    Ok(Expense {
        id: ExpenseId::new(row.get(0)?),
        description: row.get(1)?,
        amount: amount.map(Money::from_units).unwrap_or_default(),
        category: row.get(4)?,
        created_at,
    })
}
