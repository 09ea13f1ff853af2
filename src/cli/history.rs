//! History CLI command
//!
//! Shows the most recent entries of the audit log.

use clap::Args;

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Handle the history command
pub fn handle_history_command(storage: &Storage, args: HistoryArgs) -> ExpenseResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(args.limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
