//! Expense service
//!
//! Business logic for expense management: input validation, existence checks
//! ahead of mutations, and audit logging.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, NewExpense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering listed expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Only expenses with exactly this category
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category (exact, case-sensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new expense
    ///
    /// Negative amounts and blank descriptions are rejected before the
    /// database is touched.
    pub fn create(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        if input.amount.is_negative() {
            return Err(ExpenseError::InvalidAmount(input.amount));
        }

        if input.description.trim().is_empty() {
            return Err(ExpenseError::Validation("Description is required".into()));
        }

        let category = input.category.filter(|c| !c.is_empty());

        let new = NewExpense::new(input.description, input.amount, category);
        let id = self.storage.expenses.insert(&new)?;
        let expense = new.into_expense(id);

        self.audit(self.storage.log_create(&expense), expense.id);

        tracing::info!(%id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// List expenses in insertion order
    pub fn list(&self, filter: ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all(filter.category.as_deref())
    }

    /// Change the amount of an existing expense
    ///
    /// The new amount is not sign-checked.
    pub fn update_amount(&self, id: ExpenseId, amount: Money) -> ExpenseResult<Expense> {
        let before = self
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        if !self.storage.expenses.update_amount(id, amount)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }

        let after = Expense {
            amount,
            ..before.clone()
        };

        self.audit(self.storage.log_update(&before, &after), id);

        tracing::info!(%id, from = %before.amount, to = %amount, "expense updated");
        Ok(after)
    }

    /// Delete an existing expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        if !self.storage.expenses.delete(id)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }

        self.audit(self.storage.log_delete(&expense), id);

        tracing::info!(%id, "expense deleted");
        Ok(expense)
    }

    /// Count stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }

    /// Report a failed audit append
    ///
    /// Runs after the change is committed, so the failure cannot undo it and
    /// must not make the command look like it failed.
    fn audit(&self, result: ExpenseResult<()>, id: ExpenseId) {
        if let Err(e) = result {
            tracing::warn!(%id, error = %e, "expense saved but audit entry was not written");
        }
    }
}
