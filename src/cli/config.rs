//! Config CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `config`
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the current settings to the settings file so they can be edited
    #[arg(long)]
    pub init: bool,
}

/// Show paths, settings and the number of stored expenses
pub fn handle_config_command(
    storage: &Storage,
    settings: &Settings,
    args: ConfigArgs,
) -> ExpenseResult<()> {
    let paths = storage.paths();

    if args.init {
        settings.save(paths)?;
        println!("Settings written to: {}", paths.settings_file().display());
        println!();
    }

    let count = ExpenseService::new(storage).count()?;

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Database:  {}", paths.database_file().display());
    println!("Settings:  {}", paths.settings_file().display());
    println!("Audit log: {}", paths.audit_log().display());
    println!();
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Date format:     {}", settings.date_format);
    println!(
        "Audit logging:   {}",
        if settings.audit_enabled { "enabled" } else { "disabled" }
    );
    println!();
    println!("Stored expenses: {}", count);

    Ok(())
}
