//! Summary CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_month_summary, format_total_summary};
use crate::error::ExpenseResult;
use crate::services::{parse_month, SummaryService};
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Restrict the total to a calendar month (1-12), any year
    #[arg(short, long)]
    pub month: Option<String>,
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let service = SummaryService::new(storage);

    let line = match args.month {
        Some(raw) => {
            let month = parse_month(&raw)?;
            let total = service.month_total(month)?;
            format_month_summary(month, total, &settings.currency_symbol)
        }
        None => format_total_summary(service.total()?, &settings.currency_symbol),
    };

    println!("{}", line);
    Ok(())
}
