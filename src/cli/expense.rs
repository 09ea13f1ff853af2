//! Expense CLI commands
//!
//! Implements the add, list, update and delete commands.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_table_with, TableStyle};
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, Money};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    #[arg(short, long)]
    pub description: String,

    /// Amount spent (e.g., "12.50")
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub amount: Money,

    /// Optional category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID
    #[arg(short, long)]
    pub id: i64,

    /// New amount
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub amount: Money,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID
    #[arg(short, long)]
    pub id: i64,
}

fn parse_amount(input: &str) -> Result<Money, String> {
    Money::parse(input).map_err(|e| e.to_string())
}

/// Handle the add command
pub fn handle_add_command(storage: &Storage, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expense = service.create(CreateExpenseInput {
        description: args.description,
        amount: args.amount,
        category: args.category,
    })?;

    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let mut filter = ExpenseFilter::new();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }

    let expenses = service.list(filter)?;
    print!(
        "{}",
        format_expense_table_with(&expenses, &TableStyle::from(settings))
    );
    Ok(())
}

/// Handle the update command
pub fn handle_update_command(storage: &Storage, args: UpdateArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    service.update_amount(ExpenseId::new(args.id), args.amount)?;

    println!("Expense updated successfully");
    Ok(())
}

/// Handle the delete command
pub fn handle_delete_command(storage: &Storage, args: DeleteArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    service.delete(ExpenseId::new(args.id))?;

    println!("Expense deleted successfully");
    Ok(())
}
